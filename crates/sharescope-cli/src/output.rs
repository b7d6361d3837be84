//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use sharescope_core::{
    group_by_top_level_folder, BrowseEntry, CrawlOutcome, FolderListing, GranteeFile, GranteeKind,
    GranteeSummary, GraphStatistics, InheritanceFinding, PublicItem,
};
use unicode_width::UnicodeWidthStr;

/// Print the result of a crawl.
pub fn print_crawl_outcome(outcome: &CrawlOutcome) {
    if outcome.count == 0 {
        println!("{}", "Crawl finished: no items found.".yellow());
    } else {
        println!(
            "{} {} item(s) ingested.",
            "Crawl finished:".green().bold(),
            outcome.count.to_string().cyan()
        );
    }
}

/// Print aggregate graph statistics.
pub fn print_statistics(stats: &GraphStatistics) {
    println!("{}", "Sharing Graph Statistics".bold());
    println!("{}", "─".repeat(40));
    println!("  Items:        {}", stats.total_files.to_string().cyan());
    println!("  Folders:      {}", stats.folder_count.to_string().cyan());
    println!("  Files:        {}", stats.file_count.to_string().cyan());
    println!("  Grantees:     {}", stats.user_count.to_string().cyan());
    println!("  Permissions:  {}", stats.permission_count.to_string().cyan());
}

/// Print publicly shared items as a table.
pub fn print_public_items(items: &[PublicItem]) {
    if items.is_empty() {
        println!("{}", "No publicly shared items found.".green());
        return;
    }

    println!("{} {} {}", pad_right("NAME", 40), pad_right("OWNER", 30), "LINK");
    println!("{}", "─".repeat(100));

    for item in items {
        println!(
            "{} {} {}",
            pad_right(&truncate_visual(&item.name, 38), 40),
            pad_right(&truncate_visual(&item.owner, 28), 30),
            item.web_view_link.dimmed()
        );
    }

    println!();
    println!("{} item(s) shared with {}", items.len(), "anyone".red().bold());
}

/// Print broken-inheritance findings grouped by top-level folder.
pub fn print_findings(findings: &[InheritanceFinding]) {
    if findings.is_empty() {
        println!("{}", "No broken inheritance found.".green());
        return;
    }

    for (top, group) in group_by_top_level_folder(findings) {
        println!("{} {}", "▸".cyan(), top.bold());
        for finding in group {
            println!(
                "    {} {} {}",
                pad_right(&truncate_visual(&finding.name, 36), 38),
                pad_right(&truncate_visual(&finding.extra_user, 32), 34),
                format!("in {}", finding.parent_name).dimmed()
            );
            if !finding.link.is_empty() {
                println!("      {}", finding.link.dimmed());
            }
        }
        println!();
    }

    println!("{} finding(s)", findings.len());
}

/// Print grantees ordered by reach.
pub fn print_grantees(grantees: &[GranteeSummary]) {
    if grantees.is_empty() {
        println!("{}", "No grantees found.".dimmed());
        return;
    }

    println!("{} {} {}", pad_right("GRANTEE", 40), pad_right("TYPE", 8), "ITEMS");
    println!("{}", "─".repeat(56));

    for grantee in grantees {
        println!(
            "{} {} {}",
            pad_right(&truncate_visual(&grantee.email, 38), 40),
            kind_label(&grantee.kind, 8),
            grantee.file_count.to_string().cyan()
        );
    }
}

/// Print the items one grantee can access.
pub fn print_grantee_files(email: &str, files: &[GranteeFile]) {
    if files.is_empty() {
        println!("{} {}", "No items shared with".dimmed(), email.bold());
        return;
    }

    println!("{} {}", "Items shared with".bold(), email.cyan().bold());
    println!("{}", "─".repeat(60));

    for file in files {
        println!(
            "  {} {}",
            pad_right(&truncate_visual(&file.name, 44), 46),
            role_label(&file.role)
        );
    }

    println!();
    println!("{} item(s)", files.len());
}

/// Print a folder listing: folders first, then files.
pub fn print_listing(folder_id: &str, listing: &FolderListing) {
    if listing.is_empty() {
        println!("{} {}", "Nothing under".dimmed(), folder_id.bold());
        return;
    }

    for entry in &listing.folders {
        print_entry(entry);
    }
    for entry in &listing.files {
        print_entry(entry);
    }

    println!();
    println!(
        "{} folder(s), {} file(s)",
        listing.folders.len(),
        listing.files.len()
    );
}

fn print_entry(entry: &BrowseEntry) {
    let icon = if entry.is_folder { "▸".cyan() } else { "·".dimmed() };
    let name = truncate_visual(&entry.name, 40);
    let name = if entry.is_folder { name.bold() } else { name.normal() };
    println!("{} {} {}", icon, name, entry.id.dimmed());

    for grant in &entry.permissions {
        println!(
            "    {} {} {}",
            kind_label(&grant.kind, 8),
            pad_right(&truncate_visual(&grant.email, 38), 40),
            role_label(&grant.role)
        );
    }
}

fn kind_label(kind: &str, width: usize) -> ColoredString {
    let label = pad_right(kind, width);
    match GranteeKind::from_str(kind) {
        GranteeKind::Anyone => label.red().bold(),
        GranteeKind::Domain => label.yellow(),
        GranteeKind::Group => label.magenta(),
        GranteeKind::User | GranteeKind::Other(_) => label.normal(),
    }
}

fn role_label(role: &str) -> ColoredString {
    match role {
        "owner" => role.green().bold(),
        "writer" | "fileOrganizer" | "organizer" => role.yellow(),
        _ => role.normal(),
    }
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_visual_keeps_short_names() {
        assert_eq!(truncate_visual("Budget.xlsx", 20), "Budget.xlsx");
    }

    #[test]
    fn test_truncate_visual_counts_wide_chars() {
        let truncated = truncate_visual("報告書報告書報告書", 8);
        assert!(UnicodeWidthStr::width(truncated.as_str()) <= 8);
        assert!(truncated.ends_with(".."));
    }

    #[test]
    fn test_pad_right_uses_visual_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(UnicodeWidthStr::width(pad_right("報告", 6).as_str()), 6);
        assert_eq!(pad_right("toolong", 3), "toolong");
    }
}
