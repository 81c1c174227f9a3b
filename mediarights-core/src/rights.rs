use crate::clock::Clock;
use crate::leases::LeaseDeriver;
use crate::types::{Image, Lease, LeaseDefinition, UsageRightsCategory};
use serde::{Deserialize, Serialize};

/// What has to happen to an image's leases after its rights category changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseChangePlan {
    pub media_id: String,
    /// Leases granted by the new category
    pub add: Vec<Lease>,
    /// Templates of the previous category that no longer apply
    pub remove: Vec<LeaseDefinition>,
}

impl LeaseChangePlan {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

pub struct RightsPlanner;

impl RightsPlanner {
    /// Plan the lease changes for moving `image` from `previous_key` to
    /// `next_key`. An unknown next category grants nothing.
    pub fn plan(
        categories: &[UsageRightsCategory],
        image: &Image,
        next_key: &str,
        previous_key: &str,
        clock: &dyn Clock,
    ) -> LeaseChangePlan {
        let add = match categories.iter().find(|c| c.value == next_key) {
            Some(next) => LeaseDeriver::derive(&next.leases, image, clock),
            None => {
                tracing::debug!(category = next_key, "unknown rights category, no leases granted");
                Vec::new()
            }
        };

        let remove = LeaseDeriver::retractions(categories, image, previous_key, &add);

        tracing::debug!(
            media_id = %image.id,
            next = next_key,
            previous = previous_key,
            add = add.len(),
            remove = remove.len(),
            "planned lease changes"
        );

        LeaseChangePlan {
            media_id: image.id.clone(),
            add,
            remove,
        }
    }
}
