//! Property tests for the import/export transforms and the variable set.

use proptest::prelude::*;

use gantry::core::grammar::{parse, Mode};
use gantry::core::render::{render, Format};
use gantry::core::set::VariableSet;

fn arb_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z0-9_]{1,12}", 0..16)
}

proptest! {
    /// Import produces exactly one record per `--build-arg` token,
    /// preserving input order.
    #[test]
    fn build_import_one_record_per_token(names in arb_names()) {
        let input = names
            .iter()
            .map(|n| format!("--build-arg {}", n))
            .collect::<Vec<_>>()
            .join(" ");

        let parsed = parse(Mode::Build, &input).unwrap();

        prop_assert_eq!(parsed.len(), names.len());
        for (p, n) in parsed.iter().zip(names.iter()) {
            prop_assert_eq!(&p.name, n);
        }
    }

    /// Rendering build-args and importing the result restores the same
    /// names in the same order.
    #[test]
    fn build_args_render_round_trips_names(names in arb_names()) {
        let mut set = VariableSet::new();
        for n in &names {
            set.add(n.clone(), None, false).unwrap();
        }

        let rendered = render(Format::BuildArgs, Mode::Build, set.records()).unwrap();
        let parsed = parse(Mode::Build, &rendered).unwrap();

        let parsed_names: Vec<String> = parsed.into_iter().map(|p| p.name).collect();
        prop_assert_eq!(parsed_names, names);
    }

    /// Run-mode import produces one record per `-NAME VALUE` token.
    #[test]
    fn run_import_one_record_per_token(
        pairs in prop::collection::vec(("[A-Z_]{1,8}", "[a-z0-9.:/]{1,12}"), 0..10)
    ) {
        let input = pairs
            .iter()
            .map(|(n, v)| format!("-{} {}", n, v))
            .collect::<Vec<_>>()
            .join(" ");

        let parsed = parse(Mode::Run, &input).unwrap();

        prop_assert_eq!(parsed.len(), pairs.len());
        for (p, (n, v)) in parsed.iter().zip(pairs.iter()) {
            prop_assert_eq!(&p.name, n);
            prop_assert_eq!(p.value.as_ref().unwrap(), v);
        }
    }

    /// Search is a pure function of (query, records): repeated calls
    /// agree, the set is untouched, and hits are exactly the matching
    /// records.
    #[test]
    fn search_is_pure(names in arb_names(), query in "[A-Za-z0-9_]{0,6}") {
        let mut set = VariableSet::new();
        for n in &names {
            set.add(n.clone(), None, false).unwrap();
        }
        let before = set.records().to_vec();

        let first: Vec<u64> = set.search(&query).iter().map(|r| r.id).collect();
        let second: Vec<u64> = set.search(&query).iter().map(|r| r.id).collect();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(set.records(), before.as_slice());
        for record in set.records() {
            prop_assert_eq!(first.contains(&record.id), record.matches(&query));
        }
    }

    /// Ids stay unique through arbitrary delete/re-add cycles.
    #[test]
    fn ids_unique_through_delete_add_cycles(ops in prop::collection::vec(any::<bool>(), 1..24)) {
        let mut set = VariableSet::new();
        let mut seen = std::collections::HashSet::new();
        let mut counter = 0u32;

        for add in ops {
            if add || set.is_empty() {
                counter += 1;
                let id = set.add(format!("VAR_{}", counter), None, false).unwrap();
                prop_assert!(seen.insert(id), "id {} handed out twice", id);
            } else {
                let first = set.records()[0].id;
                set.remove(first).unwrap();
            }
        }
    }
}
