//! Concrete implementations of the `LineMasker` trait.
//!
//! Each masker handles one kind of sensitive token. The pipeline decides which
//! of them run and in what order.

pub mod ip_masker;
pub mod text_masker;
pub mod vrf_masker;
