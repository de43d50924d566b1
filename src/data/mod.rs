// Collaborators around the chart core: where records come from and what the detail panel shows.
mod dataset;
mod demo;
mod detail;
mod preprocess;

pub use {
    dataset::{Dataset, DatasetOrigin, load_dataset, parse_companies},
    demo::demo_dataset,
    detail::{CompanyDetail, DatasetDetailProvider, DetailProvider},
    preprocess::{preprocess, relative_yield},
};

#[cfg(not(target_arch = "wasm32"))]
pub use dataset::load_companies;
