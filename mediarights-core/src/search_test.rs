#[cfg(test)]
mod tests {
    use crate::query::AliasTable;
    use crate::search::{SearchParams, SortOrder, parse_tri_state};
    use crate::types::FieldAlias;

    fn value<'a>(pairs: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        pairs.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    #[test]
    fn sort_order_from_order_by() {
        assert_eq!(SortOrder::from_order_by(Some("oldest")).as_param(), "uploadTime");
        assert_eq!(
            SortOrder::from_order_by(Some("dateAddedToCollection")).as_param(),
            "dateAddedToCollection"
        );
        assert_eq!(SortOrder::from_order_by(Some("newest")).as_param(), "-uploadTime");
        assert_eq!(SortOrder::from_order_by(None).as_param(), "-uploadTime");
    }

    #[test]
    fn sort_selection_maps_to_order_by() {
        assert_eq!(SortOrder::from_selection("uploadNewOld"), None);
        assert_eq!(SortOrder::from_selection("oldest"), Some("oldest"));
        assert_eq!(
            SortOrder::from_selection("dateAddedToCollection"),
            Some("dateAddedToCollection")
        );
        assert_eq!(SortOrder::from_selection("random"), None);
    }

    #[test]
    fn tri_state_only_accepts_literal_booleans() {
        assert_eq!(parse_tri_state(Some("true")), Some(true));
        assert_eq!(parse_tri_state(Some("false")), Some(false));
        assert_eq!(parse_tri_state(Some("yes")), None);
        assert_eq!(parse_tri_state(None), None);
    }

    #[test]
    fn defaults_fill_length_and_order() {
        let pairs = SearchParams::default().to_query_pairs("", &AliasTable::default());
        assert_eq!(
            pairs,
            vec![
                ("q", String::new()),
                ("length", "50".to_string()),
                ("orderBy", "-uploadTime".to_string()),
            ]
        );
    }

    #[test]
    fn query_is_rewritten_and_filters_mapped() {
        let aliases = AliasTable::new(&[FieldAlias::new("photographer", "metadata.byline")]);
        let params = SearchParams {
            free: Some(true),
            length: Some(10),
            order_by: Some("oldest".to_string()),
            has_rights_acquired: Some("false".to_string()),
            has_crops: Some("maybe".to_string()),
            uploaded_by: Some("jane".to_string()),
            ..SearchParams::default()
        };
        let pairs = params.to_query_pairs("photographer:smith", &aliases);

        assert_eq!(value(&pairs, "q"), Some("\"metadata.byline\":smith "));
        assert_eq!(value(&pairs, "free"), Some("true"));
        assert_eq!(value(&pairs, "length"), Some("10"));
        assert_eq!(value(&pairs, "orderBy"), Some("uploadTime"));
        assert_eq!(value(&pairs, "hasRightsAcquired"), Some("false"));
        assert_eq!(value(&pairs, "hasExports"), None);
        assert_eq!(value(&pairs, "uploadedBy"), Some("jane"));
        assert_eq!(value(&pairs, "archived"), None);
    }

    #[test]
    fn params_deserialize_from_camel_case() {
        let params: SearchParams =
            serde_json::from_str(r#"{ "takenSince": "2020-01-01", "hasCrops": "true" }"#).unwrap();
        assert_eq!(params.taken_since.as_deref(), Some("2020-01-01"));
        let pairs = params.to_query_pairs("cats", &AliasTable::default());
        assert_eq!(value(&pairs, "q"), Some("cats"));
        assert_eq!(value(&pairs, "takenSince"), Some("2020-01-01"));
        assert_eq!(value(&pairs, "hasExports"), Some("true"));
    }
}
