#![doc = "notion-astro-core: conversion pipeline from Notion pages to Astro Markdown."]

//! This crate holds the data model, the listing contracts and the whole
//! page-to-Markdown pipeline. It performs no HTTP itself: the CLI crate
//! supplies a Notion client implementing [`contract::BlockSource`] and
//! [`contract::PageSource`].
//!
//! # Usage
//! Call [`convert::convert`] per page, or [`export::export_pages`] for a full
//! batch run into an output directory.

pub mod config;
pub mod contract;
pub mod convert;
pub mod description;
pub mod export;
pub mod fetch;
pub mod front_matter;
pub mod metadata;
pub mod model;
pub mod render;

pub use convert::convert;
