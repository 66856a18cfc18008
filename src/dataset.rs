/// This module provides access to the square footage / sale price housing dataset
pub mod housing;
