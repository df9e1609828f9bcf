pub mod menu;
pub mod prompts;

use comfy_table::Table;

/// Create a styled table for terminal display
pub fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

/// Display a success message with formatting
pub fn show_success(message: &str) {
    use colored::*;
    println!("{} {}", "●".green().bold(), message.green());
}

/// Display an error message with formatting
pub fn show_error(message: &str) {
    use colored::*;
    eprintln!("{} {}", "■".red().bold(), message.red());
}

/// Display an info message with formatting
pub fn show_info(message: &str) {
    use colored::*;
    println!("{} {}", "ℹ".blue().bold(), message.blue());
}

/// Display a warning message with formatting
pub fn show_warning(message: &str) {
    use colored::*;
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Create a formatted header
pub fn print_header(title: &str) {
    use colored::*;
    let width = 60;
    let border = "═".repeat(width);
    println!("\n{}", border.cyan());
    println!("{}", title.cyan().bold());
    println!("{}", border.cyan());
}
