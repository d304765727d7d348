use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use prcomment::app::output::{Annotation, in_github_actions, workflow_command};
use prcomment::{ActionInputs, AppError, RenderOptions};

#[derive(Parser)]
#[command(name = "prcomment")]
#[command(version)]
#[command(
    about = "Post or update a templated comment on the pull request behind a GitHub Actions event",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, update, or skip the pull request comment
    #[clap(visible_alias = "p")]
    Post(PostArgs),
    /// Render a template locally without contacting GitHub
    #[clap(visible_alias = "r")]
    Render {
        /// Template file name inside the templates directory
        template: String,
        /// Pull request number substituted for {pull_id}
        #[arg(long)]
        pull_id: u64,
        /// Branch name substituted for {branch_name}
        #[arg(long)]
        branch_name: String,
        /// Append the comment tag for this id
        #[arg(long)]
        update_comment: Option<String>,
        /// Directory holding comment templates
        #[arg(long, default_value = prcomment::domain::DEFAULT_TEMPLATES_DIR)]
        templates_dir: PathBuf,
    },
}

#[derive(Args)]
struct PostArgs {
    /// GitHub token used for API calls
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Path to the event payload JSON
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<PathBuf>,
    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,
    /// Template file name inside the templates directory
    #[arg(long, env = "INPUT_TEMPLATE")]
    template: Option<String>,
    /// Alias of --template
    #[arg(long, env = "INPUT_FILENAME", hide = true)]
    filename: Option<String>,
    /// Tag id; when set, the tagged comment is updated instead of duplicated
    #[arg(long, env = "INPUT_UPDATECOMMENT")]
    update_comment: Option<String>,
    /// Directory holding comment templates [default: .github/workflows]
    #[arg(long)]
    templates_dir: Option<PathBuf>,
    /// Step output file
    #[arg(long, env = "GITHUB_OUTPUT")]
    github_output: Option<PathBuf>,
    /// Show the planned action without writing to GitHub
    #[arg(long)]
    dry_run: bool,
}

impl From<PostArgs> for ActionInputs {
    fn from(args: PostArgs) -> Self {
        ActionInputs {
            token: args.token,
            event_path: args.event_path,
            api_url: args.api_url,
            templates_dir: args.templates_dir,
            template: args.template.or(args.filename),
            update_comment: args.update_comment,
            github_output: args.github_output,
            dry_run: args.dry_run,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Post(args) => prcomment::post(args.into()).map(|_| ()),
        Commands::Render {
            template,
            pull_id,
            branch_name,
            update_comment,
            templates_dir,
        } => {
            let options =
                RenderOptions { templates_dir, template, pull_id, branch_name, update_comment };
            prcomment::render(&options).map(|rendered| println!("{}", rendered))
        }
    };

    if let Err(e) = result {
        if in_github_actions() {
            println!("{}", workflow_command(Annotation::Error, &e.to_string()));
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
