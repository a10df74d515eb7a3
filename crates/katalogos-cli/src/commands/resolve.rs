//! Implementation of the `katalogos resolve` command.
//!
//! Slug-based routing has to live with the fact that profession slugs are
//! not unique: the same slug can name several leaf records.  The policy
//! here is to surface *every* match and let the caller disambiguate by leaf
//! id — nothing is merged or silently dropped.

use katalogos_core::application::CatalogService;

use crate::{
    cli::{GlobalArgs, ListFormat, ResolveArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ResolveArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let resolved = katalogos_adapters::resolve(args.data_dir.as_deref()).map_err(CliError::Core)?;
    let catalog = CatalogService::new(resolved.dataset);

    let matches = catalog.resolve_profession_slug(&args.slug);
    if matches.is_empty() {
        return Err(CliError::SlugNotFound {
            slug: args.slug.clone(),
        });
    }

    match args.format {
        ListFormat::Table => {
            output.header(&format!(
                "{} match(es) for slug '{}'",
                matches.len(),
                args.slug
            ))?;
            for m in &matches {
                output.print(&format!(
                    "  {} / {} (id {}, {})",
                    m.category.label, m.profession.label, m.profession.id, m.profession.kind
                ))?;
            }
            if matches.len() > 1 {
                output.print("")?;
                output.info("This slug is shared; disambiguate by profession id")?;
            }
        }

        ListFormat::List => {
            for m in &matches {
                println!("{}", m.profession.id);
            }
        }

        ListFormat::Json => {
            let records: Vec<_> = matches
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "category_id": m.category.id,
                        "category_label": m.category.label,
                        "id": m.profession.id,
                        "label": m.profession.label,
                        "slug": m.profession.slug,
                        "kind": m.profession.kind.as_str(),
                        "description": m.profession.description,
                    })
                })
                .collect();
            let rendered = serde_json::to_string_pretty(&records).map_err(|e| {
                CliError::Core(katalogos_core::error::KatalogosError::Internal {
                    message: format!("failed to serialise matches: {e}"),
                })
            })?;
            println!("{rendered}");
        }

        ListFormat::Csv => {
            println!("category_id,id,label,kind");
            for m in &matches {
                println!(
                    "{},{},{},{}",
                    m.category.id, m.profession.id, m.profession.label, m.profession.kind
                );
            }
        }
    }

    Ok(())
}
