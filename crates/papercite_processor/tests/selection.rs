/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use std::path::Path;

use papercite_processor::selection::{group_by_year, select_keys};
use papercite_processor::{Config, OutputKind, Processor, ProcessorError, SelectionSpec};
use proptest::prelude::*;

#[test]
fn test_ungrouped_scenario_orders_by_year_then_file_order() {
    let fixture = Fixture::new();
    let bib = fixture.write("bib.bib", ABC_BIB);

    let mut processor = Processor::default();
    let block = processor
        .select_and_render(&SelectionSpec::new(&bib))
        .unwrap()
        .to_string();

    assert_eq!(anchored_keys(&block), vec!["A", "C", "B"]);
    assert_eq!(
        block,
        "- <a id=\"A\"></a> Jane Doe. Alpha. *Journal*, 2020.\n\
         - <a id=\"C\"></a> Edgar Poe. Gamma. *Journal*, 2020.\n\
         - <a id=\"B\"></a> Rick Roe. *Beta*. Press, 2019."
    );
}

#[test]
fn test_grouped_scenario_emits_year_headings() {
    let fixture = Fixture::new();
    let bib = fixture.write("bib.bib", ABC_BIB);

    let mut processor = Processor::default();
    let block = processor
        .select_and_render(&SelectionSpec::new(&bib).year_grouped(true))
        .unwrap()
        .to_string();

    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "### 2020");
    assert!(lines[2].starts_with("- <a id=\"A\">"));
    assert!(lines[3].starts_with("- <a id=\"C\">"));
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "### 2019");
    assert!(lines[6].starts_with("- <a id=\"B\">"));
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_allow_and_deny_through_processor() {
    let fixture = Fixture::new();
    let bib = fixture.write("bib.bib", ABC_BIB);
    let mut processor = Processor::default();

    let articles = processor
        .select_and_render(&SelectionSpec::new(&bib).with_allow(["article"]))
        .unwrap()
        .to_string();
    assert_eq!(anchored_keys(&articles), vec!["A", "C"]);

    let no_articles = processor
        .select_and_render(&SelectionSpec::new(&bib).with_deny(["article"]))
        .unwrap()
        .to_string();
    assert_eq!(anchored_keys(&no_articles), vec!["B"]);

    let nothing = processor
        .select_and_render(
            &SelectionSpec::new(&bib)
                .with_allow(["article"])
                .with_deny(["article"]),
        )
        .unwrap();
    assert!(nothing.is_empty());
    assert_eq!(nothing.to_string(), "");

    // All three directives used the same parsed file.
    assert_eq!(processor.cache().len(), 1);
}

#[test]
fn test_explicit_keys_keep_order_and_group() {
    let fixture = Fixture::new();
    let bib = fixture.write("bib.bib", ABC_BIB);
    let mut processor = Processor::default();

    let block = processor
        .select_and_render(
            &SelectionSpec::new(&bib)
                .with_keys(["B", "A", "C"])
                .year_grouped(true),
        )
        .unwrap()
        .to_string();

    assert_eq!(anchored_keys(&block), vec!["B", "A", "C"]);
    let headings: Vec<&str> = block.lines().filter(|l| l.starts_with("###")).collect();
    assert_eq!(headings, vec!["### 2019", "### 2020"]);
}

#[test]
fn test_unknown_key_names_key_and_file() {
    let fixture = Fixture::new();
    let bib = fixture.write("bib.bib", ABC_BIB);
    let mut processor = Processor::default();

    let err = processor
        .select_and_render(&SelectionSpec::new(&bib).with_keys(["A", "nope"]))
        .unwrap_err();
    match &err {
        ProcessorError::UnknownKey { key, path } => {
            assert_eq!(key, "nope");
            assert_eq!(path, &bib);
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
    assert!(err.to_string().contains("nope"));
    assert!(err.to_string().contains("bib.bib"));
}

#[test]
fn test_undated_entries_form_last_group() {
    let fixture = Fixture::new();
    let bib = fixture.write(
        "bib.yaml",
        r#"
draft:
  type: misc
  title: Draft
old:
  type: misc
  title: Old
  year: 1999
"#,
    );
    let config = Config {
        undated_label: "n.d.".to_string(),
        ..Default::default()
    };
    let mut processor = Processor::new(config);

    let block = processor
        .select_and_render(&SelectionSpec::new(&bib).year_grouped(true))
        .unwrap()
        .to_string();
    let headings: Vec<&str> = block.lines().filter(|l| l.starts_with("###")).collect();
    assert_eq!(headings, vec!["### 1999", "### n.d."]);
    assert_eq!(anchored_keys(&block), vec!["old", "draft"]);
}

#[test]
fn test_djot_and_plain_formats() {
    let fixture = Fixture::new();
    let bib = fixture.write("bib.bib", ABC_BIB);
    let spec = SelectionSpec::new(&bib).with_keys(["B"]).year_grouped(true);

    let mut djot = Processor::new(Config {
        format: OutputKind::Djot,
        heading_level: 2,
        ..Default::default()
    });
    assert_eq!(
        djot.select_and_render(&spec).unwrap().to_string(),
        "\n## 2019\n- []{#B} Rick Roe. _Beta_. Press, 2019."
    );

    let mut plain = Processor::new(Config {
        format: OutputKind::Plain,
        ..Default::default()
    });
    assert_eq!(
        plain.select_and_render(&spec).unwrap().to_string(),
        "\n2019\n- Rick Roe. Beta. Press, 2019."
    );
}

#[test]
fn test_missing_bibliography_is_a_parse_error() {
    let fixture = Fixture::new();
    let mut processor = Processor::default();
    let err = processor
        .select_and_render(&SelectionSpec::new(fixture.path().join("absent.bib")))
        .unwrap_err();
    assert!(matches!(err, ProcessorError::BibliographyParse { .. }));
}

/// Up to 12 entries with types from a small pool and years from a small
/// range (or missing), so ties and runs are common.
fn arb_entries() -> impl Strategy<Value = Vec<(String, Option<u16>)>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["article", "book", "misc"]),
            prop::option::of(2015u16..2020),
        ),
        0..12,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(ty, year)| (ty.to_string(), year))
            .collect()
    })
}

fn build(items: &[(String, Option<u16>)]) -> (papercite_processor::Bibliography, Vec<String>) {
    let years: Vec<Option<String>> = items.iter().map(|(_, y)| y.map(|y| y.to_string())).collect();
    let keys: Vec<String> = (0..items.len()).map(|i| format!("k{i}")).collect();
    let triples: Vec<(&str, &str, Option<&str>)> = items
        .iter()
        .enumerate()
        .map(|(i, (ty, _))| (keys[i].as_str(), ty.as_str(), years[i].as_deref()))
        .collect();
    (make_bib(&triples), keys)
}

proptest! {
    #[test]
    fn prop_unfiltered_selection_is_stable_descending(items in arb_entries()) {
        let (bib, keys) = build(&items);
        let path = Path::new("p.bib");
        let selected = select_keys(&bib, &SelectionSpec::new(path), path).unwrap();

        // Same keys, nothing lost.
        let mut sorted_selected = selected.clone();
        sorted_selected.sort();
        let mut sorted_keys = keys.clone();
        sorted_keys.sort();
        prop_assert_eq!(sorted_selected, sorted_keys);

        for pair in selected.windows(2) {
            let (a, b) = (&bib[pair[0].as_str()], &bib[pair[1].as_str()]);
            let (ya, yb) = (papercite_processor::SortYear::of(a), papercite_processor::SortYear::of(b));
            prop_assert!(ya >= yb);
            if ya == yb {
                // Ties keep file order.
                let ia = bib.get_index_of(pair[0].as_str()).unwrap();
                let ib = bib.get_index_of(pair[1].as_str()).unwrap();
                prop_assert!(ia < ib);
            }
        }
    }

    #[test]
    fn prop_allow_then_deny_same_type_is_empty(items in arb_entries(), ty in prop::sample::select(vec!["article", "book", "misc"])) {
        let (bib, _) = build(&items);
        let path = Path::new("p.bib");
        let spec = SelectionSpec::new(path).with_allow([ty]).with_deny([ty]);
        prop_assert!(select_keys(&bib, &spec, path).unwrap().is_empty());
    }

    #[test]
    fn prop_grouping_is_a_lossless_partition(items in arb_entries()) {
        let (bib, _) = build(&items);
        let path = Path::new("p.bib");
        let selected = select_keys(&bib, &SelectionSpec::new(path), path).unwrap();
        let groups = group_by_year(&bib, &selected);

        let flattened: Vec<String> = groups.iter().flat_map(|g| g.keys.clone()).collect();
        prop_assert_eq!(&flattened, &selected);

        for group in &groups {
            prop_assert!(!group.keys.is_empty());
            for key in &group.keys {
                prop_assert_eq!(bib[key.as_str()].year(), group.year.as_deref());
            }
        }
        // Maximal runs: neighbouring groups never share a year.
        for pair in groups.windows(2) {
            prop_assert_ne!(&pair[0].year, &pair[1].year);
        }
    }
}
