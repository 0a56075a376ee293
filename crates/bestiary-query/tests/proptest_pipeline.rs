use bestiary_model::CreatureRecord;
use bestiary_query::{
    filter_records, run_query, FilterDimension, QueryState, SortDirection,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn arb_record() -> impl Strategy<Value = CreatureRecord> {
    (
        "[a-zA-Z]{1,12}",
        prop::array::uniform2("[a-z]{0,8}"),
        prop::array::uniform2("[a-z]{0,8}"),
        prop::array::uniform9(0_u64..50),
    )
        .prop_map(|(name, types, clans, counts)| CreatureRecord {
            name,
            sprite_id: 0,
            level: 1,
            primary_type: types[0].clone(),
            secondary_type: types[1].clone(),
            primary_clan: clans[0].clone(),
            secondary_clan: clans[1].clone(),
            npc_price: 0,
            locations: String::new(),
            poke_ball: counts[0],
            great_ball: counts[1],
            super_ball: counts[2],
            ultra_ball: counts[3],
            beast_ball_1: counts[4],
            beast_ball_2: counts[5],
            beast_ball_3: counts[6],
            beast_ball_4: counts[7],
            safari_ball: counts[8],
        })
}

proptest! {
    #![proptest_config(Config::with_cases(96))]

    #[test]
    fn name_filter_returns_only_substring_matches(
        records in prop::collection::vec(arb_record(), 0..40),
        query in "[a-zA-Z]{1,4}"
    ) {
        let needle = query.to_lowercase();
        let hits = filter_records(&records, FilterDimension::Name, &query);
        for hit in &hits {
            prop_assert!(hit.name.to_lowercase().contains(&needle));
        }
        let misses = records
            .iter()
            .filter(|r| !r.name.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(hits.len() + misses, records.len());
    }

    #[test]
    fn concatenated_pages_reconstruct_the_sequence_exactly_once(
        records in prop::collection::vec(arb_record(), 0..60),
        per_page in 1_usize..10,
        sort in prop::sample::select(vec![
            SortDirection::Unsorted,
            SortDirection::Ascending,
            SortDirection::Descending,
        ])
    ) {
        let mut state = QueryState::default();
        state.set_per_page(per_page);
        state.set_sort(sort);

        let mut expected = filter_records(&records, state.dimension, &state.query);
        bestiary_query::sort_records(&mut expected, sort);

        let mut reassembled = Vec::new();
        let mut page = 1;
        loop {
            state.set_page(page);
            let result = run_query(&records, &state);
            prop_assert_eq!(result.total_matches, expected.len());
            if result.items.is_empty() {
                // Every page past the last must also be empty.
                prop_assert!(page > result.total_pages);
                break;
            }
            reassembled.extend(result.items);
            page += 1;
        }
        prop_assert_eq!(reassembled, expected);
    }

    #[test]
    fn reversing_sort_reverses_distinct_sums_but_not_ties(
        records in prop::collection::vec(arb_record(), 1..40)
    ) {
        let mut ascending = filter_records(&records, FilterDimension::Name, "");
        bestiary_query::sort_records(&mut ascending, SortDirection::Ascending);
        let mut descending = filter_records(&records, FilterDimension::Name, "");
        bestiary_query::sort_records(&mut descending, SortDirection::Descending);

        let asc_sums: Vec<u64> = ascending.iter().map(|r| r.aggregate_capture_count()).collect();
        let mut desc_sums: Vec<u64> =
            descending.iter().map(|r| r.aggregate_capture_count()).collect();
        desc_sums.reverse();
        prop_assert_eq!(asc_sums, desc_sums);

        // Within one sum, relative order matches the original order in
        // both directions.
        for rows in [&ascending, &descending] {
            let mut last_index_per_sum: std::collections::BTreeMap<u64, usize> =
                std::collections::BTreeMap::new();
            for row in rows.iter() {
                let index = records
                    .iter()
                    .position(|r| std::ptr::eq(r, *row))
                    .expect("row comes from records");
                if let Some(previous) = last_index_per_sum.insert(row.aggregate_capture_count(), index) {
                    prop_assert!(previous < index);
                }
            }
        }
    }
}
