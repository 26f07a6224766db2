//! Fetch-and-parse pipeline for the choreography sheet
//!
//! Every call downloads the sheet again and derives the full entry list from
//! scratch; nothing is kept between calls.

use tracing::info;

use super::choreography_parser::{ChoreographyParser, ParseResult};
use super::sheet_fetcher::SheetFetcher;
use crate::Result;
use crate::app::models::Choreography;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct ChoreographyFetcher {
    fetcher: SheetFetcher,
    parser: ChoreographyParser,
}

impl ChoreographyFetcher {
    /// Validate the configuration and build both stages
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            fetcher: SheetFetcher::from_config(config)?,
            parser: ChoreographyParser::new(config)?,
        })
    }

    /// Download and parse, returning entries together with rejections
    pub async fn fetch_with_report(&self) -> Result<ParseResult> {
        let content = self.fetcher.download().await?;
        let result = self.parser.parse(&content);

        info!(
            "{} valid choreographies ({:.1}% of rows)",
            result.records.len(),
            result.stats.success_rate()
        );

        Ok(result)
    }

    /// Download and parse, returning only the valid entries in sheet order
    pub async fn fetch(&self) -> Result<Vec<Choreography>> {
        Ok(self.fetch_with_report().await?.records)
    }
}
