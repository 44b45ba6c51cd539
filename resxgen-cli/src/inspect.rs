//! The `inspect` command: show how files would be grouped and which
//! culture combinations exist, without generating anything.

use std::path::Path;

use resxgen::{detect_culture_combinations, group_files, types::CultureCombination};

use crate::scan;

pub fn run(input_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let files = scan::collect_resx_files(input_dir);
    let groups = group_files(&files);

    if groups.is_empty() {
        println!("No resource files found under {}", input_dir.display());
        return Ok(());
    }

    for group in &groups {
        println!("{}", group.main_file.path);
        for sub in &group.sub_files {
            println!("  {} ({})", sub.path, sub.culture_tag().unwrap_or("?"));
        }
    }

    let combos = detect_culture_combinations(&groups);
    println!();
    println!("Distinct culture combinations: {}", combos.len());
    for combo in &combos {
        println!("  [{}]", combo_tags(combo));
    }
    Ok(())
}

fn combo_tags(combo: &CultureCombination) -> String {
    combo.tags().collect::<Vec<_>>().join(", ")
}
