use crate::clock::Clock;
use crate::types::{
    AccessKind, CATEGORY_LEASED_BY, Image, Lease, LeaseCollection, LeaseDefinition, StartDateRule,
    UsageRightsCategory,
};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Turns a category's lease templates into concrete leases for one image.
pub struct LeaseDeriver;

impl LeaseDeriver {
    /// Derive the leases `definitions` grant on `image`, in definition order.
    ///
    /// A definition contributes a lease only when its access kind is
    /// recognized and its start date resolves against the image.
    pub fn derive(definitions: &[LeaseDefinition], image: &Image, clock: &dyn Clock) -> Vec<Lease> {
        definitions
            .iter()
            .filter_map(|definition| Self::derive_one(definition, image, clock))
            .collect()
    }

    fn derive_one(definition: &LeaseDefinition, image: &Image, clock: &dyn Clock) -> Option<Lease> {
        let Some(access) = definition.access() else {
            tracing::debug!(kind = %definition.kind, media_id = %image.id, "skipping lease with unknown access kind");
            return None;
        };

        let Some(start_date) = Self::resolve_start(definition.start_rule(), image, clock) else {
            tracing::debug!(
                rule = definition.start_date.as_deref().unwrap_or("NONE"),
                media_id = %image.id,
                "skipping lease without a start date"
            );
            return None;
        };

        let end_date = match definition.duration.filter(|years| *years > 0) {
            Some(years) => {
                let Some(end) = add_years(start_date, years) else {
                    tracing::debug!(years, media_id = %image.id, "skipping lease whose end date overflows");
                    return None;
                };
                Some(end)
            }
            None => None,
        };

        Some(Lease {
            id: None,
            access,
            created_at: clock.now(),
            leased_by: CATEGORY_LEASED_BY.to_string(),
            start_date,
            end_date,
            notes: definition.notes.clone().unwrap_or_default(),
            media_id: image.id.clone(),
        })
    }

    fn resolve_start(
        rule: Option<StartDateRule>,
        image: &Image,
        clock: &dyn Clock,
    ) -> Option<DateTime<Utc>> {
        match rule? {
            StartDateRule::Today => Some(clock.now()),
            StartDateRule::Upload => Some(image.upload_time),
            StartDateRule::Taken => image.metadata.date_taken,
            StartDateRule::TxDate => image.original_tx_date(),
        }
    }

    /// Lease definitions of the previous category that the newly derived
    /// leases no longer cover, matched by access kind.
    ///
    /// Only `derived` leases for `image` count. An unknown previous category
    /// retracts nothing, and neither does a definition whose kind is not
    /// recognized, since it could never have produced a lease.
    pub fn retractions(
        categories: &[UsageRightsCategory],
        image: &Image,
        previous_key: &str,
        derived: &[Lease],
    ) -> Vec<LeaseDefinition> {
        let Some(previous) = categories.iter().find(|c| c.value == previous_key) else {
            return Vec::new();
        };

        let still_granted: Vec<AccessKind> = derived
            .iter()
            .filter(|lease| lease.media_id == image.id)
            .map(|lease| lease.access)
            .collect();

        previous
            .leases
            .iter()
            .filter(|definition| {
                definition
                    .access()
                    .is_some_and(|access| !still_granted.contains(&access))
            })
            .cloned()
            .collect()
    }
}

/// `start` moved forward by whole calendar years, keeping month, day and
/// time of day. 29 February rolls over to 1 March in non-leap years.
pub fn add_years(start: DateTime<Utc>, years: u32) -> Option<DateTime<Utc>> {
    let year = start.year().checked_add(i32::try_from(years).ok()?)?;
    let date = match NaiveDate::from_ymd_opt(year, start.month(), start.day()) {
        Some(date) => date,
        // only 29 Feb can be missing from the target year
        None => NaiveDate::from_ymd_opt(year, 3, 1)?,
    };
    Some(date.and_time(start.time()).and_utc())
}

/// The remote collection if it supersedes the local one.
///
/// A never-written local collection is superseded once the remote has been
/// written; otherwise the remote must be strictly newer.
pub fn newer_leases<'a>(
    local: &LeaseCollection,
    remote: &'a LeaseCollection,
) -> Option<&'a LeaseCollection> {
    let remote_modified = remote.last_modified?;
    match local.last_modified {
        None => Some(remote),
        Some(local_modified) if remote_modified > local_modified => Some(remote),
        Some(_) => None,
    }
}
