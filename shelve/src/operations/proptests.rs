//! Property-based tests for the operations module.
//!
//! These tests focus on the planning invariants: destination
//! uniqueness under the counter-suffix rule and full coverage of
//! visible input files once the safety net is folded in.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use crate::inventory::{is_hidden, DirectoryInventory};
use crate::operations::classify::{ClassificationRecord, ClassifyPlan};
use crate::operations::plan::PlanOptions;
use crate::operations::unclassified::plan_unclassified;

// Output root that never exists, so reconciliation sees an empty tree.
const OUTPUT_ROOT: &str = "/shelve-proptest-output";

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Colliding folder/filename suggestions always get distinct destinations
    #[test]
    fn classified_destinations_never_collide(
        specs in prop::collection::vec(("[a-z]{1,6}", "[a-z]{1,6}"), 1..12)
    ) {
        let records: Vec<ClassificationRecord> = specs
            .iter()
            .enumerate()
            .map(|(idx, (folder, name))| ClassificationRecord {
                file_path: PathBuf::from(format!("/in/source_{idx}.pdf")),
                foldername: folder.clone(),
                filename: name.clone(),
            })
            .collect();

        let options = PlanOptions::new(OUTPUT_ROOT);
        let inventory = DirectoryInventory::default();
        let plan = ClassifyPlan::new(&records, &options)
            .build_plan(&inventory)
            .unwrap();

        // Distinct sources means every record is planned.
        prop_assert_eq!(plan.len(), records.len());

        let destinations: HashSet<&PathBuf> =
            plan.operations().iter().map(|op| &op.destination).collect();
        prop_assert_eq!(destinations.len(), plan.len());
    }

    // The strategy plus the safety net covers every visible file exactly once
    #[test]
    fn organizing_covers_every_visible_file_once(
        entries in prop::collection::vec(
            (any::<bool>(), "[a-z]{1,6}", prop::option::of(("[a-z]{1,6}", "[a-z]{1,6}"))),
            1..12
        )
    ) {
        let mut files = Vec::new();
        let mut records = Vec::new();
        for (idx, (hidden, name, classified)) in entries.iter().enumerate() {
            let base = if *hidden {
                format!(".{name}_{idx}.dat")
            } else {
                format!("{name}_{idx}.dat")
            };
            let path = PathBuf::from("/in").join(base);
            files.push(path.clone());
            if !*hidden {
                if let Some((folder, new_name)) = classified {
                    records.push(ClassificationRecord {
                        file_path: path,
                        foldername: folder.clone(),
                        filename: new_name.clone(),
                    });
                }
            }
        }

        let options = PlanOptions::new(OUTPUT_ROOT);
        let inventory = DirectoryInventory::default();
        let classified = ClassifyPlan::new(&records, &options)
            .build_plan(&inventory)
            .unwrap();
        let net = plan_unclassified(&files, &classified, Path::new(OUTPUT_ROOT));
        let plan = classified.merge(net);

        let sources: Vec<&Path> =
            plan.operations().iter().map(|op| op.source.as_path()).collect();
        let unique: HashSet<&Path> = sources.iter().copied().collect();
        prop_assert_eq!(sources.len(), unique.len());

        let visible: HashSet<&Path> = files
            .iter()
            .filter(|path| !is_hidden(path))
            .map(PathBuf::as_path)
            .collect();
        prop_assert_eq!(unique, visible);
    }
}
