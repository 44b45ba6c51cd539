//! The `generate` command: scan, group, resolve, generate, write.

use std::{fs, path::Path};

use rayon::prelude::*;

use resxgen::{
    CancellationToken, Diagnostic, FileOptions, GeneratedUnit, GlobalOptions, Severity,
    detect_culture_combinations, generate_accessor_class, generate_culture_helper, group_files,
};

use crate::{config::Config, scan};

pub fn run(
    input_dir: &Path,
    output_dir: &Path,
    config_path: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let files = scan::collect_resx_files(input_dir);
    let groups = group_files(&files);

    let global = GlobalOptions::resolve(&config.global_settings(input_dir));
    if !global.valid {
        // Missing required project settings: the generator is inactive.
        return Ok(());
    }

    let matchers = config.file_matchers()?;
    let all_options: Vec<FileOptions> = groups
        .into_iter()
        .map(|group| {
            let relative = Path::new(&group.main_file.path)
                .strip_prefix(input_dir)
                .unwrap_or(Path::new(&group.main_file.path))
                .to_path_buf();
            let settings = crate::config::file_settings(&matchers, &relative);
            FileOptions::resolve(group, &settings, &global)
        })
        .filter(|options| options.valid)
        .collect();

    let token = CancellationToken::new();
    let mut units = all_options
        .par_iter()
        .map(|options| generate_accessor_class(options, &token))
        .collect::<Result<Vec<GeneratedUnit>, _>>()?;

    // Shared lookup helpers are only referenced by inline-lookup members.
    let inline_groups: Vec<_> = all_options
        .iter()
        .filter(|options| options.use_inline_lookup)
        .map(|options| options.grouped_file.clone())
        .collect();
    for combo in detect_culture_combinations(&inline_groups) {
        units.push(generate_culture_helper(&combo));
    }

    fs::create_dir_all(output_dir)?;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    for unit in &units {
        fs::write(output_dir.join(&unit.name), &unit.source)?;
        diagnostics.extend(unit.diagnostics.iter().cloned());
    }

    report(&diagnostics, json)?;
    println!(
        "Generated {} file(s) into {}",
        units.len(),
        output_dir.display()
    );
    Ok(())
}

fn report(diagnostics: &[Diagnostic], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        if !diagnostics.is_empty() {
            println!("{}", serde_json::to_string_pretty(diagnostics)?);
        }
        return Ok(());
    }
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    if errors > 0 {
        eprintln!("{errors} error(s) reported; output was still generated");
    }
    Ok(())
}
