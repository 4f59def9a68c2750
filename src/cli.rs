use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phpinit")]
#[command(version, about = "Interactive bootstrapper for PHP project templates")]
#[command(long_about = "phpinit turns a freshly cloned PHP template into your project. \
It asks for the project metadata (title, vendor, package name, description, minimum PHP \
version, license, author), generates README.md from README.template.md and patches \
composer.json and package.json in place.")]
#[command(styles = get_styles())]
#[command(after_help = "Examples:
  phpinit                 Bootstrap the project in the current directory
  phpinit path/to/clone   Bootstrap the project at the given root
  phpinit --no-color      Plain output, e.g. when piping the answers in")]
pub struct Cli {
    /// Project root containing README.template.md (default: current directory)
    #[arg(value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            clap::builder::styling::AnsiColor::Cyan
                .on_default()
                .bold(),
        )
        .header(
            clap::builder::styling::AnsiColor::Cyan
                .on_default()
                .bold(),
        )
        .literal(clap::builder::styling::AnsiColor::Green.on_default())
        .placeholder(clap::builder::styling::AnsiColor::Yellow.on_default())
        .error(
            clap::builder::styling::AnsiColor::Red
                .on_default()
                .bold(),
        )
}
