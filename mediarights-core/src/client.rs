//! High-level client bundling configuration, the alias table and a clock.
//! The CLI and the HTTP service both delegate to this.

use crate::clock::{Clock, SystemClock};
use crate::config::ClientConfig;
use crate::leases::LeaseDeriver;
use crate::query::{self, AliasTable};
use crate::rights::{LeaseChangePlan, RightsPlanner};
use crate::search::SearchParams;
use crate::types::{Image, Lease, UsageRightsCategory};

pub struct RightsClient {
    config: ClientConfig,
    /// Built once from `config.field_aliases`
    aliases: AliasTable,
    clock: Box<dyn Clock + Send + Sync>,
}

impl RightsClient {
    /// Create a client reading the wall clock.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: ClientConfig, clock: impl Clock + Send + Sync + 'static) -> Self {
        let aliases = config.alias_table();
        Self {
            config,
            aliases,
            clock: Box::new(clock),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn categories(&self) -> &[UsageRightsCategory] {
        &self.config.usage_rights_categories
    }

    /// Rewrite a user-typed query into index syntax.
    pub fn rewrite_query(&self, query: &str) -> String {
        query::rewrite(query, &self.aliases)
    }

    /// Query parameters for a search request.
    pub fn search_params(&self, query: &str, params: &SearchParams) -> Vec<(&'static str, String)> {
        params.to_query_pairs(query, &self.aliases)
    }

    /// Leases the category `category_key` grants on `image`.
    /// Returns `None` when no such category is configured.
    pub fn derive_leases(&self, category_key: &str, image: &Image) -> Option<Vec<Lease>> {
        let category = self.config.category(category_key)?;
        Some(LeaseDeriver::derive(&category.leases, image, self.clock.as_ref()))
    }

    /// Lease changes for moving `image` from `previous_key` to `next_key`.
    pub fn plan_rights_change(&self, image: &Image, next_key: &str, previous_key: &str) -> LeaseChangePlan {
        RightsPlanner::plan(
            self.categories(),
            image,
            next_key,
            previous_key,
            self.clock.as_ref(),
        )
    }
}

impl Default for RightsClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
