use proptest::prelude::*;
use resxgen::{GroupedFile, InputFile, group_files};

fn pool() -> Vec<InputFile> {
    let paths = [
        "proj/Strings.resx",
        "proj/Strings.da.resx",
        "proj/Strings.da-DK.resx",
        "proj/Strings.vi.resx",
        "proj/Errors.resx",
        "proj/Errors.fr.resx",
        "proj/Sub/Strings.resx",
        "proj/Sub/Strings.da.resx",
        "proj/Orphan.da.resx",
        "proj/Readme.v2.resx",
    ];
    paths
        .iter()
        .enumerate()
        .map(|(hash, path)| InputFile::new(*path, hash as u64, None))
        .collect()
}

fn file_subset_strategy() -> impl Strategy<Value = Vec<InputFile>> {
    let pool = pool();
    let len = pool.len();
    proptest::sample::subsequence(pool, 0..=len).prop_shuffle()
}

proptest! {
    /// Grouping is a pure function of the file *set*: any permutation of
    /// the same files yields structurally equal groups.
    #[test]
    fn grouping_is_order_independent(files in file_subset_strategy()) {
        let mut sorted = files.clone();
        sorted.sort_by(|a, b| a.path.cmp(&b.path));

        let from_input: Vec<GroupedFile> = group_files(&files);
        let from_sorted: Vec<GroupedFile> = group_files(&sorted);
        prop_assert_eq!(from_input, from_sorted);
    }

    /// Orphan culture files never surface in any group.
    #[test]
    fn orphans_are_dropped(files in file_subset_strategy()) {
        let groups = group_files(&files);
        for group in &groups {
            prop_assert_ne!(group.main_file.path.as_str(), "proj/Orphan.da.resx");
            for sub in &group.sub_files {
                prop_assert_ne!(sub.path.as_str(), "proj/Orphan.da.resx");
            }
        }
    }

    /// Every input file is either a main file, a sibling of a main file in
    /// its own directory, or an orphan culture file.
    #[test]
    fn grouping_partitions_non_orphans(files in file_subset_strategy()) {
        let groups = group_files(&files);
        let mut seen = 0usize;
        for group in &groups {
            seen += 1 + group.sub_files.len();
        }
        let orphans = files
            .iter()
            .filter(|f| {
                f.path == "proj/Orphan.da.resx"
                    || (f.path == "proj/Strings.da.resx"
                        && !files.iter().any(|m| m.path == "proj/Strings.resx"))
                    || (f.path == "proj/Strings.da-DK.resx"
                        && !files.iter().any(|m| m.path == "proj/Strings.resx"))
                    || (f.path == "proj/Strings.vi.resx"
                        && !files.iter().any(|m| m.path == "proj/Strings.resx"))
                    || (f.path == "proj/Errors.fr.resx"
                        && !files.iter().any(|m| m.path == "proj/Errors.resx"))
                    || (f.path == "proj/Sub/Strings.da.resx"
                        && !files.iter().any(|m| m.path == "proj/Sub/Strings.resx"))
            })
            .count();
        prop_assert_eq!(seen + orphans, files.len());
    }
}
