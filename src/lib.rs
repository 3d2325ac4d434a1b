//! shopgpt: browse a product catalog, summarize reviews with an LLM, export the summary.
//! Hexagonal layout: domain, ports, adapters, use cases.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
