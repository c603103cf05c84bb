//! Property tests for the transformation stages.

use std::collections::BTreeMap;

use proptest::prelude::*;

use erc_model::RecordSet;
use erc_model::columns::{BUYER_NAME, ITEM_TITLE, SHIP_TO_COUNTRY};
use erc_transform::{
    DedupeNames, FilterCountry, Stage, TransformPipeline, TruncateField, strip_last_token,
};

fn single_column(column: &str, values: &[String]) -> RecordSet {
    let mut records = RecordSet::new(vec![column.to_string()]).unwrap();
    for value in values {
        records.push_row([value.as_str()]).unwrap();
    }
    records
}

fn column_values(records: &RecordSet, column: &str) -> Vec<Option<String>> {
    records
        .iter()
        .map(|record| record.text(column).map(str::to_string))
        .collect()
}

fn country() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("United States".to_string()),
        Just("Canada".to_string()),
        Just("united states".to_string()),
        "[A-Za-z ]{0,15}",
    ]
}

proptest! {
    #[test]
    fn truncation_keeps_a_prefix_of_at_most_23_chars(
        titles in prop::collection::vec(any::<String>(), 0..20)
    ) {
        let output = TruncateField::default()
            .apply(single_column(ITEM_TITLE, &titles))
            .unwrap();

        let values = column_values(&output.records, ITEM_TITLE);
        prop_assert_eq!(values.len(), titles.len());
        for (before, after) in titles.iter().zip(values) {
            let after = after.unwrap();
            prop_assert!(after.chars().count() <= 23);
            if before.chars().count() > 23 {
                let expected: String = before.chars().take(23).collect();
                prop_assert_eq!(after, expected);
            } else {
                prop_assert_eq!(&after, before);
            }
        }
    }

    #[test]
    fn dedupe_strips_first_and_nulls_the_rest(
        names in prop::collection::vec("[A-C]{1,2}( [A-C]{1,2}){0,2}", 0..20)
    ) {
        let output = DedupeNames::default()
            .apply(single_column(BUYER_NAME, &names))
            .unwrap();

        let values = column_values(&output.records, BUYER_NAME);
        prop_assert_eq!(values.len(), names.len());

        let mut first_seen: BTreeMap<&str, usize> = BTreeMap::new();
        for (idx, name) in names.iter().enumerate() {
            let first = *first_seen.entry(name.as_str()).or_insert(idx);
            if first == idx {
                prop_assert_eq!(values[idx].as_deref(), Some(strip_last_token(name)));
            } else {
                prop_assert_eq!(values[idx].as_deref(), None);
            }
        }
    }

    #[test]
    fn filter_is_the_united_states_subsequence(
        countries in prop::collection::vec(country(), 0..30)
    ) {
        let mut records = RecordSet::new(vec![
            SHIP_TO_COUNTRY.to_string(),
            "Row".to_string(),
        ])
        .unwrap();
        for (idx, country) in countries.iter().enumerate() {
            records.push_row([country.clone(), idx.to_string()]).unwrap();
        }

        let output = FilterCountry::default().apply(records).unwrap();

        let expected: Vec<Option<String>> = countries
            .iter()
            .enumerate()
            .filter(|(_, country)| country.as_str() == "United States")
            .map(|(idx, _)| Some(idx.to_string()))
            .collect();
        prop_assert!(output.records.len() <= countries.len());
        prop_assert_eq!(column_values(&output.records, "Row"), expected);
    }

    #[test]
    fn pipeline_never_adds_columns(
        rows in prop::collection::vec((country(), "[a-z ]{0,8}", ".{0,40}"), 0..15)
    ) {
        let columns = vec![
            SHIP_TO_COUNTRY.to_string(),
            BUYER_NAME.to_string(),
            ITEM_TITLE.to_string(),
        ];
        let mut records = RecordSet::new(columns.clone()).unwrap();
        for (country, name, title) in &rows {
            records.push_row([country.as_str(), name.as_str(), title.as_str()]).unwrap();
        }

        let output = TransformPipeline::default().execute(records).unwrap();

        prop_assert_eq!(output.records.columns(), columns.as_slice());
        for record in &output.records {
            prop_assert_eq!(record.len(), columns.len());
        }
    }
}
