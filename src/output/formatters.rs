//! Output formatting functionality
//!
//! Text renderers for each report view, plus JSON and CSV exporters.

use crate::error::{InspectError, Result};
use crate::models::analysis::InspectionReport;
use crate::models::config::ReportView;
use crate::models::file_tree::{FileKind, FileTreeNode};
use crate::models::import_tree::{DependencyIndexEntry, ImportTreeNode};
use crate::models::package::{PackageKind, PackageSet};
use ansi_term::Colour::{Blue, Cyan, Green, Purple, Yellow};
use ansi_term::Style;

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const PIPE: &str = "│  ";
const SPACE: &str = "   ";

fn paint(use_colors: bool, style: Style, text: impl AsRef<str>) -> String {
    if use_colors {
        style.paint(text.as_ref()).to_string()
    } else {
        text.as_ref().to_string()
    }
}

fn heading(use_colors: bool, title: &str) -> String {
    format!("{}\n", paint(use_colors, Blue.bold(), title))
}

/// Short per-kind package counts, e.g. `2 formulas, 1 cask`
fn package_counts(packages: &PackageSet) -> String {
    let mut parts = Vec::new();
    for (kind, singular, plural) in [
        (PackageKind::Formula, "formula", "formulas"),
        (PackageKind::Cask, "cask", "casks"),
        (PackageKind::SystemPackage, "system package", "system packages"),
    ] {
        let count = packages.of_kind(kind).len();
        if count > 0 {
            parts.push(format!("{} {}", count, if count == 1 { singular } else { plural }));
        }
    }
    parts.join(", ")
}

/// Format the host module order as a numbered list
pub fn format_order_text(report: &InspectionReport, use_colors: bool) -> String {
    let mut output = heading(use_colors, &format!("Module order for {}", report.hostname));

    if report.module_order.is_empty() {
        output.push_str("  No host configuration found\n");
        return output;
    }

    for (position, file) in report.module_order.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", position + 1, paint(use_colors, Cyan.normal(), file)));
    }
    output
}

/// Format an import tree with box-drawing connectors.
///
/// Nodes declaring packages are annotated with per-kind counts; in verbose
/// mode the names are listed as well.
pub fn format_tree_text(tree: Option<&ImportTreeNode>, use_colors: bool, verbose: bool) -> String {
    let mut output = heading(use_colors, "Import tree");

    let Some(root) = tree else {
        output.push_str("  No root configuration file found\n");
        return output;
    };

    output.push_str(&tree_label(root, use_colors, true));
    output.push('\n');
    push_tree_details(&mut output, root, "", use_colors, verbose);
    push_tree_children(&mut output, root, "", use_colors, verbose);
    output
}

fn tree_label(node: &ImportTreeNode, use_colors: bool, is_root: bool) -> String {
    let style = if is_root { Blue.bold() } else { Style::new() };
    let mut label = paint(use_colors, style, &node.file);
    if let Some(packages) = &node.packages {
        label.push_str(&format!("  [{}]", paint(use_colors, Green.normal(), package_counts(packages))));
    }
    label
}

fn push_tree_details(output: &mut String, node: &ImportTreeNode, prefix: &str, use_colors: bool, verbose: bool) {
    for pruned in &node.pruned_cycles {
        output.push_str(&format!(
            "{}{}\n",
            prefix,
            paint(use_colors, Yellow.normal(), format!("  ↺ {} (cycle)", pruned))
        ));
    }

    if !verbose {
        return;
    }
    if let Some(packages) = &node.packages {
        for kind in [PackageKind::Formula, PackageKind::Cask, PackageKind::SystemPackage] {
            let names = packages.of_kind(kind);
            if !names.is_empty() {
                output.push_str(&format!(
                    "{}  {} {}\n",
                    prefix,
                    paint(use_colors, Style::new().dimmed(), format!("{}:", kind)),
                    names.join(" ")
                ));
            }
        }
    }
}

fn push_tree_children(output: &mut String, node: &ImportTreeNode, prefix: &str, use_colors: bool, verbose: bool) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        output.push_str(&format!("{}{}{}\n", prefix, connector, tree_label(child, use_colors, false)));

        let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
        push_tree_details(output, child, &child_prefix, use_colors, verbose);
        push_tree_children(output, child, &child_prefix, use_colors, verbose);
    }
}

/// Format the flat dependency index.
///
/// The imports of the `selected` entry are listed below it; with `verbose`
/// every entry's imports are listed.
pub fn format_deps_text(
    dependencies: &[DependencyIndexEntry],
    use_colors: bool,
    verbose: bool,
    selected: Option<usize>,
) -> String {
    let mut output = heading(use_colors, &format!("Dependencies ({} files)", dependencies.len()));

    for (i, entry) in dependencies.iter().enumerate() {
        let is_selected = selected == Some(i);
        let marker = if is_selected { "> " } else { "  " };
        let count = format!("{:>3}", entry.import_count());
        let file = if is_selected {
            paint(use_colors, Cyan.bold(), &entry.file)
        } else {
            entry.file.clone()
        };
        output.push_str(&format!("{}{} {}\n", marker, paint(use_colors, Purple.normal(), count), file));

        if is_selected || verbose {
            let last = entry.imports.len().saturating_sub(1);
            for (j, import) in entry.imports.iter().enumerate() {
                let connector = if j == last { LAST_BRANCH } else { BRANCH };
                output.push_str(&format!("      {}{}\n", connector, paint(use_colors, Style::new().dimmed(), import)));
            }
        }
    }
    output
}

/// Format the repository package summary, one section per kind
pub fn format_packages_text(packages: &PackageSet, use_colors: bool) -> String {
    let mut output = heading(use_colors, &format!("Packages ({})", packages.len()));

    if packages.is_empty() {
        output.push_str("  No packages declared\n");
        return output;
    }

    for (kind, title) in [
        (PackageKind::Formula, "Homebrew formulas"),
        (PackageKind::Cask, "Homebrew casks"),
        (PackageKind::SystemPackage, "Nix system packages"),
    ] {
        let names = packages.of_kind(kind);
        if names.is_empty() {
            continue;
        }
        output.push_str(&format!("  {} ({})\n", paint(use_colors, Green.bold(), title), names.len()));
        for name in names {
            output.push_str(&format!("    {}\n", name));
        }
    }
    output
}

/// Format the configuration file browser
pub fn format_files_text(tree: &FileTreeNode, use_colors: bool) -> String {
    let mut output = heading(use_colors, "Configuration files");
    output.push_str(&format!("{}/\n", paint(use_colors, Blue.bold(), &tree.name)));
    push_file_children(&mut output, tree, "", use_colors);
    output
}

fn push_file_children(output: &mut String, node: &FileTreeNode, prefix: &str, use_colors: bool) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        let label = match child.kind {
            FileKind::Directory => paint(use_colors, Blue.normal(), format!("{}/", child.name)),
            FileKind::File => {
                let details = format!(
                    "({} imports, {})",
                    child.import_count.unwrap_or(0),
                    format_size(child.size.unwrap_or(0))
                );
                format!("{} {}", child.name, paint(use_colors, Style::new().dimmed(), details))
            }
        };
        output.push_str(&format!("{}{}{}\n", prefix, connector, label));

        let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
        push_file_children(output, child, &child_prefix, use_colors);
    }
}

/// Format the report header and headline numbers
pub fn format_summary_text(report: &InspectionReport, use_colors: bool) -> String {
    let summary = &report.summary;
    let mut output = heading(use_colors, "Configuration Inspection Summary");

    output.push_str(&format!("Project: {}\n", report.project_root.display()));
    output.push_str(&format!("Host: {}\n", report.hostname));
    output.push_str(&format!("Configuration files: {}\n", summary.config_files));
    output.push_str(&format!("Total imports: {}\n", summary.total_imports));
    output.push_str(&format!("Import tree: {} nodes, depth {}\n", summary.tree_nodes, summary.tree_depth));
    if let Some(file) = &summary.most_imports_file {
        output.push_str(&format!("Most imports: {} ({})\n", file, summary.most_imports_count));
    }
    output.push_str(&format!("Packages: {}\n", report.packages.len()));
    output.push_str(&format!("Scan duration: {}\n", summary.format_duration()));
    output.push_str(&format!(
        "Generated: {}\n",
        paint(use_colors, Style::new().dimmed(), report.generated_at.to_rfc3339())
    ));
    output
}

/// Format one view of a report as text
pub fn format_report_text(report: &InspectionReport, view: ReportView, use_colors: bool, verbose: bool) -> String {
    match view {
        ReportView::Order => format_order_text(report, use_colors),
        ReportView::Tree => format_tree_text(report.import_tree.as_ref(), use_colors, verbose),
        ReportView::Deps => format_deps_text(&report.dependencies, use_colors, verbose, None),
        ReportView::Packages => format_packages_text(&report.packages, use_colors),
        ReportView::Files => format_files_text(&report.file_tree, use_colors),
        ReportView::All => [
            format_summary_text(report, use_colors),
            format_order_text(report, use_colors),
            format_tree_text(report.import_tree.as_ref(), use_colors, verbose),
            format_deps_text(&report.dependencies, use_colors, verbose, None),
            format_packages_text(&report.packages, use_colors),
            format_files_text(&report.file_tree, use_colors),
        ]
        .join("\n"),
    }
}

/// Format a file size in a human-readable way
pub fn format_size(size: u64) -> String {
    if size < 1024 {
        format!("{}B", size)
    } else if size < 1024 * 1024 {
        format!("{:.2}KB", size as f64 / 1024.0)
    } else {
        format!("{:.2}MB", size as f64 / (1024.0 * 1024.0))
    }
}

/// Format one view of a report as pretty-printed JSON
pub fn format_report_json(report: &InspectionReport, view: ReportView) -> Result<String> {
    let json = match view {
        ReportView::Order => serde_json::to_string_pretty(&report.module_order),
        ReportView::Tree => serde_json::to_string_pretty(&report.import_tree),
        ReportView::Deps => serde_json::to_string_pretty(&report.dependencies),
        ReportView::Packages => serde_json::to_string_pretty(&report.packages),
        ReportView::Files => serde_json::to_string_pretty(&report.file_tree),
        ReportView::All => serde_json::to_string_pretty(report),
    };
    json.map_err(|source| InspectError::JsonSerialize { source })
}

/// Format one view of a report as CSV.
///
/// `all` has no single tabular shape and exports the dependency index.
pub fn format_report_csv(report: &InspectionReport, view: ReportView) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    match view {
        ReportView::Order => {
            writer.write_record(["Position", "File"])?;
            for (position, file) in report.module_order.iter().enumerate() {
                writer.write_record([(position + 1).to_string(), file.clone()])?;
            }
        }
        ReportView::Tree => {
            writer.write_record(["Depth", "File", "Parent", "Formulas", "Casks", "System Packages"])?;
            if let Some(root) = &report.import_tree {
                write_tree_rows(&mut writer, root, "")?;
            }
        }
        ReportView::Deps | ReportView::All => {
            writer.write_record(["File", "Import Count", "Imports"])?;
            for entry in &report.dependencies {
                writer.write_record([
                    entry.file.clone(),
                    entry.import_count().to_string(),
                    entry.imports.join(";"),
                ])?;
            }
        }
        ReportView::Packages => {
            writer.write_record(["Kind", "Name"])?;
            for kind in [PackageKind::Formula, PackageKind::Cask, PackageKind::SystemPackage] {
                for name in report.packages.of_kind(kind) {
                    writer.write_record([kind.to_string(), name.clone()])?;
                }
            }
        }
        ReportView::Files => {
            writer.write_record(["Path", "Imports", "Size (bytes)"])?;
            write_file_rows(&mut writer, &report.file_tree)?;
        }
    }

    let data = String::from_utf8(writer.into_inner()?)
        .map_err(|source| InspectError::CsvSerialize { source })?;
    Ok(data)
}

fn write_tree_rows(writer: &mut csv::Writer<Vec<u8>>, node: &ImportTreeNode, parent: &str) -> Result<()> {
    let packages = node.packages.clone().unwrap_or_default();
    writer.write_record([
        node.depth.to_string(),
        node.file.clone(),
        parent.to_string(),
        packages.formulas.join(" "),
        packages.casks.join(" "),
        packages.system_packages.join(" "),
    ])?;
    for child in &node.children {
        write_tree_rows(writer, child, &node.file)?;
    }
    Ok(())
}

fn write_file_rows(writer: &mut csv::Writer<Vec<u8>>, node: &FileTreeNode) -> Result<()> {
    if node.kind == FileKind::File {
        writer.write_record([
            node.path.clone(),
            node.import_count.unwrap_or(0).to_string(),
            node.size.unwrap_or(0).to_string(),
        ])?;
    }
    for child in &node.children {
        write_file_rows(writer, child)?;
    }
    Ok(())
}
