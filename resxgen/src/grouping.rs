//! Clusters a flat file list into main-file/sibling groups.

use std::collections::HashMap;
use std::path::Path;

use crate::{
    paths,
    types::{CultureCombination, GroupedFile, InputFile},
};

fn group_key(path: &str) -> String {
    let directory = Path::new(path)
        .parent()
        .and_then(Path::to_str)
        .unwrap_or("");
    format!("{}/{}", directory, paths::base_name(path))
}

/// Groups files into (main file, culture siblings) clusters.
///
/// Two passes: files without a culture suffix register as main files (first
/// occurrence wins on a duplicate key), then culture-suffixed files attach
/// to their main file. An orphan culture file with no base file is dropped
/// silently.
///
/// The result is ordered by main-file path and each group's siblings are
/// path-sorted, so any permutation of `files` produces an equal result.
pub fn group_files(files: &[InputFile]) -> Vec<GroupedFile> {
    let mut mains: HashMap<String, &InputFile> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for file in files {
        if file.file_stem() == paths::base_name(&file.path) {
            let key = group_key(&file.path);
            if !mains.contains_key(&key) {
                mains.insert(key.clone(), file);
                order.push(key);
            }
        }
    }

    let mut siblings: HashMap<String, Vec<InputFile>> = HashMap::new();
    for file in files {
        if file.file_stem() == paths::base_name(&file.path) {
            continue;
        }
        let key = group_key(&file.path);
        // Orphan culture files with no base file are dropped here.
        if mains.contains_key(&key) {
            siblings.entry(key).or_default().push(file.clone());
        }
    }

    let mut groups: Vec<GroupedFile> = order
        .into_iter()
        .map(|key| {
            let main = mains[&key].clone();
            let subs = siblings.remove(&key).unwrap_or_default();
            GroupedFile::new(main, subs)
        })
        .collect();
    groups.sort_by(|a, b| a.main_file.path.cmp(&b.main_file.path));
    groups
}

/// The distinct culture-combination shapes across all groups, deduplicated
/// by tag-sequence equality, in first-occurrence order.
pub fn detect_culture_combinations(groups: &[GroupedFile]) -> Vec<CultureCombination> {
    let mut seen: Vec<CultureCombination> = Vec::new();
    for group in groups {
        let combo = CultureCombination::new(&group.sub_files);
        if !seen.contains(&combo) {
            seen.push(combo);
        }
    }
    seen
}
