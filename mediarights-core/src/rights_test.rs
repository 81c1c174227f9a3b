#[cfg(test)]
mod tests {
    use crate::clock::FixedClock;
    use crate::rights::RightsPlanner;
    use crate::types::{AccessKind, Image, LeaseDefinition, StartDateRule, UsageRightsCategory};
    use chrono::{DateTime, Utc};

    fn at(ts: &str) -> DateTime<Utc> {
        ts.parse().unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock(at("2024-06-01T12:00:00Z"))
    }

    fn catalogue() -> Vec<UsageRightsCategory> {
        vec![
            UsageRightsCategory::new("No Rights", ""),
            UsageRightsCategory::new("Handout", "handout")
                .with_lease(LeaseDefinition::new(AccessKind::AllowUse, StartDateRule::Upload))
                .with_lease(LeaseDefinition::new(AccessKind::DenySyndication, StartDateRule::Today)),
            UsageRightsCategory::new("Programme Promotion", "programme-promotional")
                .with_lease(
                    LeaseDefinition::new(AccessKind::AllowUse, StartDateRule::TxDate).with_duration(1),
                )
                .with_lease(
                    LeaseDefinition::new(AccessKind::DenyUse, StartDateRule::TxDate).with_duration(1),
                ),
        ]
    }

    fn image() -> Image {
        Image::new("img-1", at("2020-01-01T00:00:00Z"))
    }

    #[test]
    fn first_category_only_adds() {
        let plan = RightsPlanner::plan(&catalogue(), &image(), "handout", "", &clock());
        assert_eq!(plan.media_id, "img-1");
        assert_eq!(plan.add.len(), 2);
        assert!(plan.remove.is_empty());
    }

    #[test]
    fn category_without_leases_retracts_previous() {
        let plan = RightsPlanner::plan(&catalogue(), &image(), "", "handout", &clock());
        assert!(plan.add.is_empty());
        assert_eq!(plan.remove.len(), 2);
    }

    #[test]
    fn unresolvable_new_category_retracts_previous() {
        // No transmission date on the image, so nothing derives
        let plan = RightsPlanner::plan(&catalogue(), &image(), "programme-promotional", "handout", &clock());
        assert!(plan.add.is_empty());
        assert_eq!(plan.remove.len(), 2);
    }

    #[test]
    fn overlapping_kinds_are_not_retracted() {
        let img = image().with_domain_field(
            "programmes",
            "originalTxDate",
            serde_json::json!("2019-05-01T19:00:00Z"),
        );
        let plan = RightsPlanner::plan(&catalogue(), &img, "programme-promotional", "handout", &clock());

        assert_eq!(plan.add.len(), 2);
        assert_eq!(
            plan.remove,
            vec![LeaseDefinition::new(AccessKind::DenySyndication, StartDateRule::Today)]
        );
    }

    #[test]
    fn reselecting_same_category_retracts_nothing() {
        let plan = RightsPlanner::plan(&catalogue(), &image(), "handout", "handout", &clock());
        assert_eq!(plan.add.len(), 2);
        assert!(plan.remove.is_empty());
    }

    #[test]
    fn plan_serializes_camel_case() {
        let plan = RightsPlanner::plan(&catalogue(), &image(), "handout", "", &clock());
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["mediaId"], "img-1");
        assert!(json.get("media_id").is_none());
        assert_eq!(json["add"][0]["mediaId"], "img-1");
    }

    #[test]
    fn unknown_categories_produce_empty_plan() {
        let plan = RightsPlanner::plan(&catalogue(), &image(), "mystery", "also-mystery", &clock());
        assert!(plan.is_empty());
    }
}
