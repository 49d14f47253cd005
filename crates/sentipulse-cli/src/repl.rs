//! Interactive command loops for the user and admin surfaces.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use sentipulse_app::views::{AdminPanel, AdminTab, ExportView, HistoryView};
use sentipulse_app::{AdminSurface, Dashboard, UserSurface};
use sentipulse_client::ApiClient;

use crate::render;

const USER_COMMANDS: &[&str] = &[
    "analyze", "fetch", "help", "history", "keyword", "login", "logout", "news", "pick", "quit",
    "result", "signup", "status", "topic", "topics", "whoami",
];

const ADMIN_COMMANDS: &[&str] = &[
    "activity", "export", "help", "login", "logout", "overview", "quit", "searches", "users",
    "verify",
];

/// Line helper: prefix completion over the surface's command set.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new(commands: &[&str]) -> Self {
        Self {
            commands: commands.iter().map(|cmd| cmd.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        // Only the command word completes; arguments are free-form.
        if line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Highlighter for CliHelper {}

impl Validator for CliHelper {}

fn make_editor(commands: &[&str]) -> Result<Editor<CliHelper, DefaultHistory>> {
    let mut editor = Editor::new()?;
    editor.set_helper(Some(CliHelper::new(commands)));
    Ok(editor)
}

/// Splits a line into the command word and the rest.
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

/// Reads a line, mapping Ctrl-C/Ctrl-D to "stop".
fn read_line(editor: &mut Editor<CliHelper, DefaultHistory>, prompt: &str) -> Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn prompt_credentials(
    editor: &mut Editor<CliHelper, DefaultHistory>,
    username_arg: &str,
) -> Result<Option<(String, String)>> {
    let username = if username_arg.is_empty() {
        match read_line(editor, "Username: ")? {
            Some(line) if !line.trim().is_empty() => line.trim().to_string(),
            _ => return Ok(None),
        }
    } else {
        username_arg.to_string()
    };
    let Some(password) = read_line(editor, "Password: ")? else {
        return Ok(None);
    };
    Ok(Some((username, password)))
}

/// The user dashboard loop.
pub async fn run_user(api: Arc<ApiClient>) -> Result<()> {
    let mut surface = UserSurface::new(api.clone());
    surface.resolve().await;

    let mut editor = make_editor(USER_COMMANDS)?;
    println!("{}", "Sentipulse — news sentiment analysis".bold());
    println!("API: {}", api.base().dimmed());

    let mut dashboard = Dashboard::new(api.clone());
    let mut history = HistoryView::new(api.clone());

    match surface.session() {
        Some(user) => {
            println!("{}", render::signed_in_line(&user.username).green());
            dashboard.load_trending().await;
            render::print_topics(dashboard.topics());
        }
        None => println!("Not signed in. Use `login <username>` or `signup <username>`."),
    }

    loop {
        let Some(line) = read_line(&mut editor, "sentipulse> ")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);
        let (command, rest) = split_command(line);

        match command {
            "quit" | "exit" => break,
            "help" => print_user_help(),
            "login" | "signup" => {
                let Some((username, password)) = prompt_credentials(&mut editor, rest)? else {
                    continue;
                };
                let attempt = if command == "login" {
                    surface.login(&username, &password).await
                } else {
                    surface.signup(&username, &password).await
                };
                match attempt {
                    Ok(identity) => {
                        println!("{}", render::signed_in_line(&identity.username).green());
                        if !dashboard.topics_loaded() {
                            dashboard.load_trending().await;
                        }
                        render::print_topics(dashboard.topics());
                    }
                    Err(err) => render::print_error(&err.to_string()),
                }
            }
            "logout" => {
                surface.logout().await;
                println!("Signed out.");
            }
            "whoami" => match surface.session() {
                Some(user) => println!("{}", render::signed_in_line(&user.username)),
                None => println!("Not signed in."),
            },
            _ if !surface.is_authenticated() => {
                println!("Please sign in first (`login <username>`).");
            }
            "topics" => render::print_topics(dashboard.topics()),
            "topic" => {
                let selection = rest
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| dashboard.topics().get(index.wrapping_sub(1)))
                    .map(|topic| topic.id);
                match selection {
                    Some(id) => {
                        if let Err(err) = dashboard.select_topic(id) {
                            render::print_error(&err.to_string());
                        } else {
                            println!(
                                "Selected topic: {}",
                                dashboard.workflow().keyword().purple()
                            );
                        }
                    }
                    None => render::print_error("Usage: topic <number from `topics`>"),
                }
            }
            "keyword" => {
                if rest.is_empty() {
                    render::print_error("Usage: keyword <text>");
                } else {
                    dashboard.enter_keyword(rest);
                    println!("Keyword set: {}", dashboard.workflow().keyword().purple());
                }
            }
            "fetch" => {
                dashboard.fetch_news().await;
                match dashboard.workflow().error() {
                    Some(message) => render::print_error(message),
                    None => render::print_news(
                        dashboard.workflow().news(),
                        dashboard.workflow().selected_news().map(|item| item.id),
                    ),
                }
            }
            "news" => render::print_news(
                dashboard.workflow().news(),
                dashboard.workflow().selected_news().map(|item| item.id),
            ),
            "pick" => {
                let selection = rest
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| dashboard.workflow().news().get(index.wrapping_sub(1)))
                    .map(|item| item.id);
                match selection {
                    Some(id) => match dashboard.select_news(id) {
                        Ok(()) => {
                            if let Some(item) = dashboard.workflow().selected_news() {
                                println!("Selected for analysis: {}", item.preview(50).purple());
                            }
                        }
                        Err(err) => render::print_error(&err.to_string()),
                    },
                    None => render::print_error("Usage: pick <number from `news`>"),
                }
            }
            "analyze" => {
                dashboard.analyze().await;
                match dashboard.workflow().error() {
                    Some(message) => render::print_error(message),
                    None => {
                        if let Some(result) = dashboard.workflow().result() {
                            render::print_result(result);
                        }
                    }
                }
            }
            "result" => match dashboard.workflow().result() {
                Some(result) => render::print_result(result),
                None => println!("No analysis yet; `pick` an item and `analyze`."),
            },
            "history" => {
                history.load().await;
                match history.state().error() {
                    Some(message) => render::print_error(message),
                    None => {
                        if let Some(overview) = history.overview() {
                            render::print_history(overview);
                        }
                    }
                }
            }
            "status" => {
                println!("Step: {:?}", dashboard.workflow().step());
                if !dashboard.workflow().keyword().is_empty() {
                    println!("Keyword: {}", dashboard.workflow().keyword());
                }
            }
            other => render::print_error(&format!("Unknown command `{other}`; try `help`.")),
        }
    }

    Ok(())
}

/// The admin panel loop.
pub async fn run_admin(api: Arc<ApiClient>) -> Result<()> {
    let mut surface = AdminSurface::new(api.clone());
    surface.resolve().await;

    let mut editor = make_editor(ADMIN_COMMANDS)?;
    println!("{}", "Sentipulse — admin panel".bold());
    println!("API: {}", api.base().dimmed());

    let mut panel = AdminPanel::new(api.clone());

    match surface.session() {
        Some(admin) => println!("{}", render::signed_in_line(&admin.username).green()),
        None => println!("Not signed in. Use `login <username>`."),
    }

    loop {
        let Some(line) = read_line(&mut editor, "sentipulse(admin)> ")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);
        let (command, rest) = split_command(line);

        match command {
            "quit" | "exit" => break,
            "help" => print_admin_help(),
            "login" => {
                let Some((username, password)) = prompt_credentials(&mut editor, rest)? else {
                    continue;
                };
                match surface.login(&username, &password).await {
                    Ok(identity) => {
                        println!("{}", render::signed_in_line(&identity.username).green())
                    }
                    Err(err) => render::print_error(&err.to_string()),
                }
            }
            "logout" => {
                surface.logout().await;
                println!("Signed out.");
            }
            _ if !surface.is_authenticated() => {
                println!("Please sign in first (`login <username>`).");
            }
            "overview" => {
                panel.activate(AdminTab::Overview).await;
                match panel.statistics().error() {
                    Some(message) => render::print_error(message),
                    None => {
                        if let Some(stats) = panel.statistics().data() {
                            render::print_statistics(stats);
                        }
                    }
                }
            }
            "users" => {
                panel.activate(AdminTab::Users).await;
                match panel.users().error() {
                    Some(message) => render::print_error(message),
                    None => {
                        if let Some(users) = panel.users().data() {
                            render::print_users(users);
                        }
                    }
                }
            }
            "searches" => {
                panel.activate(AdminTab::Searches).await;
                match panel.searches().error() {
                    Some(message) => render::print_error(message),
                    None => {
                        if let Some(searches) = panel.searches().data() {
                            render::print_searches(searches);
                        }
                    }
                }
            }
            "activity" => {
                match rest {
                    "" => panel.activate(AdminTab::Activity).await,
                    "next" => panel.activity_next().await,
                    "prev" => panel.activity_prev().await,
                    _ => {
                        render::print_error("Usage: activity [next|prev]");
                        continue;
                    }
                }
                match panel.activity().state().error() {
                    Some(message) => render::print_error(message),
                    None => render::print_activity(panel.activity()),
                }
            }
            "export" => {
                let (subcommand, path_arg) = split_command(rest);
                match subcommand {
                    "" => {
                        panel.activate(AdminTab::Export).await;
                        match panel.export().state().error() {
                            Some(message) => render::print_error(message),
                            None => {
                                if let Some(summary) = panel.export().summary() {
                                    println!("{summary}");
                                    println!("Use `export save [path]` to write the file.");
                                }
                            }
                        }
                    }
                    "save" => {
                        let default_name = ExportView::default_filename(
                            chrono::Utc::now().date_naive(),
                        );
                        let path = if path_arg.is_empty() {
                            Path::new(&default_name).to_path_buf()
                        } else {
                            Path::new(path_arg).to_path_buf()
                        };
                        match panel.export().save_to(&path) {
                            Ok(written) => println!("Export written to {}", written.display()),
                            Err(err) => render::print_error(&err.to_string()),
                        }
                    }
                    _ => render::print_error("Usage: export [save [path]]"),
                }
            }
            "verify" => match api.admin().verify().await {
                Ok(report) => render::print_verify(&report),
                Err(err) => render::print_error(&err.to_string()),
            },
            other => render::print_error(&format!("Unknown command `{other}`; try `help`.")),
        }
    }

    Ok(())
}

fn print_user_help() {
    println!("{}", "Commands".bold());
    println!("  login [user] / signup [user]   start a session");
    println!("  logout / whoami                session management");
    println!("  topics                         list trending topics");
    println!("  topic <n>                      select a trending topic");
    println!("  keyword <text>                 set a custom keyword");
    println!("  fetch                          fetch news for the keyword");
    println!("  news / pick <n>                list and select news items");
    println!("  analyze / result               run and show the analysis");
    println!("  history                        your past analyses");
    println!("  status                         current workflow step");
    println!("  quit                           leave");
}

fn print_admin_help() {
    println!("{}", "Commands".bold());
    println!("  login [user] / logout      operator session");
    println!("  overview                   aggregate statistics");
    println!("  users / searches           full tables");
    println!("  activity [next|prev]       paginated activity log");
    println!("  export [save [path]]       fetch and save the data bundle");
    println!("  verify                     storage consistency check");
    println!("  quit                       leave");
}
