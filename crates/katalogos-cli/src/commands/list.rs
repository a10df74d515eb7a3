//! Implementation of the `katalogos list` command.

use katalogos_core::application::CatalogService;
use katalogos_core::domain::ProviderKind;

use crate::{
    cli::{GlobalArgs, KindFilter, ListArgs, ListFormat, ListTarget},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One rendered listing, format-agnostic.
struct Listing {
    title: String,
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
    json: serde_json::Value,
}

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let resolved = katalogos_adapters::resolve(args.data_dir.as_deref()).map_err(CliError::Core)?;
    let catalog = CatalogService::new(resolved.dataset);

    let listing = build_listing(&catalog, &args)?;
    render(&listing, args.format, &output)
}

fn build_listing(catalog: &CatalogService, args: &ListArgs) -> CliResult<Listing> {
    match args.target {
        ListTarget::Regions => {
            let regions = catalog.regions();
            Ok(Listing {
                title: format!("Regions ({})", regions.len()),
                headers: &["id", "name", "areas"],
                rows: regions
                    .iter()
                    .map(|r| vec![r.id.clone(), r.name.clone(), r.children.len().to_string()])
                    .collect(),
                json: serde_json::to_value(regions).unwrap_or_default(),
            })
        }

        ListTarget::Areas => {
            let region_id = args.region.as_deref().ok_or(CliError::MissingScope {
                target: "areas",
                flag: "--region",
            })?;
            let areas = catalog
                .areas_of(region_id)
                .ok_or_else(|| CliError::EntityNotFound {
                    entity: "region",
                    id: region_id.to_owned(),
                })?;
            Ok(Listing {
                title: format!("Areas of region {region_id} ({})", areas.len()),
                headers: &["id", "name", "postal codes"],
                rows: areas
                    .iter()
                    .map(|a| vec![a.id.clone(), a.name.clone(), a.children.len().to_string()])
                    .collect(),
                json: serde_json::to_value(areas).unwrap_or_default(),
            })
        }

        ListTarget::PostalCodes => {
            let region_id = args.region.as_deref().ok_or(CliError::MissingScope {
                target: "postal-codes",
                flag: "--region",
            })?;
            let area_id = args.area.as_deref().ok_or(CliError::MissingScope {
                target: "postal-codes",
                flag: "--area",
            })?;
            // Distinguish the two not-found cases for a precise message.
            let region = catalog
                .region(region_id)
                .ok_or_else(|| CliError::EntityNotFound {
                    entity: "region",
                    id: region_id.to_owned(),
                })?;
            let area = region.area(area_id).ok_or_else(|| CliError::EntityNotFound {
                entity: "area",
                id: area_id.to_owned(),
            })?;
            Ok(Listing {
                title: format!("Postal codes of {} ({})", area.name, area.children.len()),
                headers: &["id", "postal code"],
                rows: area
                    .children
                    .iter()
                    .map(|p| vec![p.id.clone(), p.name.clone()])
                    .collect(),
                json: serde_json::to_value(&area.children).unwrap_or_default(),
            })
        }

        ListTarget::Categories => {
            let categories = catalog.categories();
            Ok(Listing {
                title: format!("Categories ({})", categories.len()),
                headers: &["id", "label", "slug", "professions"],
                rows: categories
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.clone(),
                            c.label.clone(),
                            c.slug.clone(),
                            c.children.len().to_string(),
                        ]
                    })
                    .collect(),
                json: serde_json::to_value(categories).unwrap_or_default(),
            })
        }

        ListTarget::Professions => {
            let category_id = args.category.as_deref().ok_or(CliError::MissingScope {
                target: "professions",
                flag: "--category",
            })?;
            let kind = args.kind.map(|k| match k {
                KindFilter::Freelancer => ProviderKind::Freelancer,
                KindFilter::Company => ProviderKind::Company,
            });
            let professions: Vec<_> = match &kind {
                Some(kind) => catalog
                    .professions_by_kind(category_id, kind)
                    .ok_or_else(|| CliError::EntityNotFound {
                        entity: "category",
                        id: category_id.to_owned(),
                    })?,
                None => catalog
                    .professions_of(category_id)
                    .ok_or_else(|| CliError::EntityNotFound {
                        entity: "category",
                        id: category_id.to_owned(),
                    })?
                    .iter()
                    .collect(),
            };
            Ok(Listing {
                title: format!(
                    "Professions of category {category_id} ({})",
                    professions.len()
                ),
                headers: &["id", "label", "slug", "kind"],
                rows: professions
                    .iter()
                    .map(|p| {
                        vec![
                            p.id.clone(),
                            p.label.clone(),
                            p.slug.clone(),
                            p.kind.to_string(),
                        ]
                    })
                    .collect(),
                json: serde_json::to_value(&professions).unwrap_or_default(),
            })
        }

        ListTarget::Tags => {
            let tags = catalog.tags();
            Ok(Listing {
                title: format!("Tags ({})", tags.len()),
                headers: &["id", "slug", "label"],
                rows: tags
                    .iter()
                    .map(|t| vec![t.id.clone(), t.slug.clone(), t.label.clone()])
                    .collect(),
                json: serde_json::to_value(tags).unwrap_or_default(),
            })
        }
    }
}

fn render(listing: &Listing, format: ListFormat, output: &OutputManager) -> CliResult<()> {
    match format {
        ListFormat::Table => {
            output.header(&listing.title)?;
            for row in &listing.rows {
                output.print(&format!("  {}", row.join("  ")))?;
            }
        }

        ListFormat::List => {
            // Second column is the display name for every target.
            for row in &listing.rows {
                println!("{}", row.get(1).unwrap_or(&row[0]));
            }
        }

        ListFormat::Json => {
            // Serialise the records themselves to stdout (bypasses the
            // OutputManager because JSON must stay parseable in pipes).
            let rendered = serde_json::to_string_pretty(&listing.json).map_err(|e| {
                CliError::Core(katalogos_core::error::KatalogosError::Internal {
                    message: format!("failed to serialise listing: {e}"),
                })
            })?;
            println!("{rendered}");
        }

        ListFormat::Csv => {
            println!("{}", listing.headers.join(","));
            for row in &listing.rows {
                println!("{}", row.join(","));
            }
        }
    }
    Ok(())
}
