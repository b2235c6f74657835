pub mod discount;
pub mod egress;
pub mod ingest;
pub mod join;
pub mod pricing_table;
pub mod reports;

use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::pipeline::egress::{write_report, ReportRow};
use crate::pipeline::ingest::{read_direct_info, read_price_info, read_update_names};
use crate::pipeline::join::{MissingRecord, ProductCatalog};
use crate::pipeline::reports::{build_catalog_update, build_combined_discount, ReportBuild};
use crate::types::UpdateNameSet;

/// Everything read from the three input files
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub names: UpdateNameSet,
    pub catalog: ProductCatalog,
    /// Open/read failures; the affected input is partial or empty
    pub failures: Vec<String>,
}

/// Outcome of writing one report
#[derive(Debug, Clone)]
pub enum ReportOutcome {
    Written {
        path: PathBuf,
        rows: usize,
        missing: usize,
        filtered: usize,
    },
    Failed {
        path: PathBuf,
        error: String,
    },
}

impl ReportOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, ReportOutcome::Written { .. })
    }
}

/// Result of a complete pipeline run
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub update_names: usize,
    pub input_failures: Vec<String>,
    pub catalog_update: ReportOutcome,
    pub combined_discount: ReportOutcome,
}

/// How the update names join against the two product sources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinCoverage {
    pub update_names: usize,
    pub joined: usize,
    pub missing_direct: Vec<String>,
    pub missing_price: Vec<String>,
    pub discount_eligible: usize,
}

pub struct Pipeline;

impl Pipeline {
    /// Read all three inputs. Never fails; problems are collected in `failures`.
    pub fn load(config: &Config) -> LoadedInputs {
        let names = read_update_names(&config.price_update_path());
        let direct = read_direct_info(&config.product_in_direct_path());
        let prices = read_price_info(&config.product_new_price_path());

        let failures = [&names.failure, &direct.failure, &prices.failure]
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        LoadedInputs {
            names: names.data,
            catalog: ProductCatalog::new(direct.data, prices.data),
            failures,
        }
    }

    /// Ingest, build both reports, and write each one independently
    #[instrument(skip_all, fields(folder = %config.folder.display()))]
    pub fn run(config: &Config) -> PipelineResult {
        info!("Starting pricing export");
        let inputs = Self::load(config);
        info!(
            "Loaded {} update names, {} direct records, {} price records",
            inputs.names.len(),
            inputs.catalog.direct_len(),
            inputs.catalog.price_len()
        );

        let catalog_update = Self::write(
            &config.catalog_update_path(),
            build_catalog_update(&inputs.names, &inputs.catalog),
        );
        let combined_discount = Self::write(
            &config.combined_discount_path(),
            build_combined_discount(&inputs.names, &inputs.catalog),
        );

        PipelineResult {
            update_names: inputs.names.len(),
            input_failures: inputs.failures,
            catalog_update,
            combined_discount,
        }
    }

    /// Ingest and join only; nothing is written
    #[instrument(skip_all, fields(folder = %config.folder.display()))]
    pub fn check(config: &Config) -> JoinCoverage {
        let inputs = Self::load(config);
        let mut coverage = JoinCoverage {
            update_names: inputs.names.len(),
            ..JoinCoverage::default()
        };

        for name in &inputs.names {
            match inputs.catalog.lookup(name) {
                Ok(product) => {
                    coverage.joined += 1;
                    if product.price.core.has_tiered_discount() {
                        coverage.discount_eligible += 1;
                    }
                }
                Err(MissingRecord::DirectInfo) => coverage.missing_direct.push(name.clone()),
                Err(MissingRecord::PriceInfo) => coverage.missing_price.push(name.clone()),
            }
        }
        coverage
    }

    fn write<R: ReportRow>(path: &Path, build: ReportBuild<R>) -> ReportOutcome {
        match write_report(path, &build.rows) {
            Ok(rows) => ReportOutcome::Written {
                path: path.to_path_buf(),
                rows,
                missing: build.missing,
                filtered: build.filtered,
            },
            Err(e) => {
                error!("Failed to write {}: {}", path.display(), e);
                ReportOutcome::Failed {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                }
            }
        }
    }
}
