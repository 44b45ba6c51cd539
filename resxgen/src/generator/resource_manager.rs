//! ResourceManager-mode member bodies: accessors delegate to a lazily
//! constructed `System.Resources.ResourceManager` keyed by the group's
//! embedded resource identifier.

use std::collections::HashSet;

use crate::{
    error::Result,
    options::FileOptions,
    resx,
    types::{CancellationToken, Diagnostic},
};

use super::{CULTURE_INFO_PROPERTY, begin_member, csharp_literal};

pub(crate) fn append_usings(builder: &mut String) {
    builder.push_str("using System.Globalization;\nusing System.Resources;\n\n");
}

pub(crate) fn generate_members(
    options: &FileOptions,
    content: &str,
    indent: &str,
    container_class: &str,
    builder: &mut String,
    diagnostics: &mut Vec<Diagnostic>,
    token: &CancellationToken,
) -> Result<()> {
    append_store_members(builder, indent, container_class, options);

    let Ok(entries) = resx::parse_resx(content) else {
        return Ok(());
    };

    // The store glue already declares a CultureInfo property; a resource
    // key of the same name must collide, not shadow it.
    let mut already_added = HashSet::from([CULTURE_INFO_PROPERTY.to_string()]);
    for entry in &entries {
        token.check()?;
        let Some(member) = begin_member(
            builder,
            indent,
            options,
            entry,
            &mut already_added,
            diagnostics,
            container_class,
        ) else {
            continue;
        };

        let bang = if options.null_forgiving_operators { "!" } else { "" };
        let placeholders = entry.value.matches('{').count();
        if placeholders == 0 {
            if member.access_by_name {
                builder.push_str(&format!(
                    " => ResourceManager.GetString(nameof({}), {CULTURE_INFO_PROPERTY}){bang};\n",
                    member.name
                ));
            } else {
                builder.push_str(&format!(
                    " => ResourceManager.GetString({}, {CULTURE_INFO_PROPERTY}){bang};\n",
                    csharp_literal(&entry.key)
                ));
            }
        } else {
            let params = (0..placeholders)
                .map(|i| format!("object? param{i}"))
                .collect::<Vec<_>>()
                .join(", ");
            let args = (0..placeholders)
                .map(|i| format!("param{i}"))
                .collect::<Vec<_>>()
                .join(", ");
            builder.push_str(&format!(
                "({params}) => string.Format({CULTURE_INFO_PROPERTY}, ResourceManager.GetString({}, {CULTURE_INFO_PROPERTY})!, {args});\n",
                csharp_literal(&entry.key)
            ));
        }
    }

    Ok(())
}

fn append_store_members(
    builder: &mut String,
    indent: &str,
    container_class: &str,
    options: &FileOptions,
) {
    builder.push_str(indent);
    builder.push_str("private static ResourceManager? s_resourceManager;\n");

    builder.push_str(indent);
    builder.push_str("public static ResourceManager ResourceManager => s_resourceManager ??= new ResourceManager(");
    builder.push_str(&csharp_literal(&options.embedded_filename));
    builder.push_str(", typeof(");
    builder.push_str(container_class);
    builder.push_str(").Assembly);\n");

    builder.push_str(indent);
    builder.push_str("public ");
    if options.static_members {
        builder.push_str("static ");
    }
    builder.push_str("CultureInfo? ");
    builder.push_str(CULTURE_INFO_PROPERTY);
    builder.push_str(" { get; set; }\n");
}
