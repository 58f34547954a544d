//! Display functions for catalog packages and import results

use console::Style;

use crate::catalog::CatalogPackage;
use crate::importer::ImportReport;

macro_rules! display_opt_field {
    ($label:expr, $value:expr) => {
        if let Some(ref v) = $value {
            println!("{} {}", Style::new().bold().apply_to($label), v);
        }
    };
}

const COLUMNS: [&str; 8] = [
    "Id", "Name", "FQN", "Author", "Active", "Is Public", "Type", "Version",
];

fn row(package: &CatalogPackage) -> [String; 8] {
    [
        package.id.clone(),
        package.name.clone(),
        package.fully_qualified_name.clone(),
        package.author.clone().unwrap_or_default(),
        package.enabled.to_string(),
        package.is_public.to_string(),
        package.package_type.clone().unwrap_or_default(),
        package.version.clone().unwrap_or_default(),
    ]
}

/// Render packages as an aligned plain-text table, header first
pub fn format_package_table(packages: &[CatalogPackage]) -> Vec<String> {
    let rows: Vec<[String; 8]> = packages.iter().map(row).collect();
    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[&str]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(&COLUMNS)];
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(format_line(&cells));
    }
    lines
}

/// Print the package table
pub fn display_package_table(packages: &[CatalogPackage]) {
    if packages.is_empty() {
        println!("No packages found.");
        return;
    }

    let mut lines = format_package_table(packages).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", Style::new().bold().apply_to(header));
    }
    for line in lines {
        println!("{line}");
    }
}

/// Print every field of one package
pub fn display_package(package: &CatalogPackage) {
    println!(
        "{}",
        Style::new().bold().yellow().apply_to(&package.fully_qualified_name)
    );
    println!("{} {}", Style::new().bold().apply_to("Id:"), package.id);
    println!("{} {}", Style::new().bold().apply_to("Name:"), package.name);
    display_opt_field!("Type:", package.package_type);
    display_opt_field!("Version:", package.version);
    display_opt_field!("Author:", package.author);
    display_opt_field!("Owner:", package.owner_id);
    println!("{} {}", Style::new().bold().apply_to("Active:"), package.enabled);
    println!(
        "{} {}",
        Style::new().bold().apply_to("Is Public:"),
        package.is_public
    );
    if !package.categories.is_empty() {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Categories:"),
            package.categories.join(", ")
        );
    }
    if !package.tags.is_empty() {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Tags:"),
            package.tags.join(", ")
        );
    }
    display_opt_field!("Description:", package.description);
}

/// Print what an import run did
pub fn display_import_report(report: &ImportReport) {
    for name in &report.created {
        println!("{} {}", Style::new().green().bold().apply_to("Imported"), name);
    }
    for name in &report.replaced {
        println!("{} {}", Style::new().green().bold().apply_to("Updated"), name);
    }
    for name in &report.skipped {
        println!("{} {}", Style::new().yellow().apply_to("Skipped"), name);
    }
    for (name, err) in &report.failed {
        println!("{} {}: {}", Style::new().red().bold().apply_to("Failed"), name, err);
    }

    if let Some(err) = &report.aborted {
        println!("{} {}", Style::new().red().bold().apply_to("Aborted"), err);
    }

    println!();
    println!(
        "{} {} imported, {} skipped, {} failed",
        Style::new().bold().apply_to("Summary:"),
        report.imported(),
        report.skipped.len(),
        report.failed.len()
    );
}
