#![cfg(not(doctest))]

#[macro_use]
extern crate diesel;

pub mod db;
pub mod env;
pub mod models;
pub mod schema;
