//! `terminus-plugin help`: open or print the README of installed plugins.

use anyhow::Result;
use clap::{ArgGroup, Args};
use tracing::{debug, info, warn};

use crate::cmd::{ProcessRunner, SystemRunner};
use crate::config::Config;
use crate::error::{HelpError, PluginError, USAGE};
use crate::http::{HttpClient, ReqwestClient};
use crate::output::{Reporter, TerminalReporter};
use crate::platform::Launcher;
use crate::plugin::{PluginDirectory, paths, remote};
use crate::readme::{ArticleRenderer, ReadmeRenderer, ReadmeTarget, locator, render_readme};

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("mode").args(["browse", "print"])))]
pub struct HelpArgs {
    /// Plugin names, as installed under the plugin directory
    pub plugins: Vec<String>,

    /// Open help in the default browser (default)
    #[arg(long)]
    pub browse: bool,

    /// Display help in the terminal window
    #[arg(long)]
    pub print: bool,
}

impl HelpArgs {
    /// Names of the mode flags that were passed, without leading dashes.
    pub fn mode_flags(&self) -> Vec<String> {
        let mut flags = Vec::new();
        if self.browse {
            flags.push("browse".to_string());
        }
        if self.print {
            flags.push("print".to_string());
        }
        flags
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Browse,
    Print,
}

impl Mode {
    /// Validate mode flag names. No flag means browse.
    pub fn from_flags(flags: &[String]) -> Result<Self, HelpError> {
        let mut mode = None;
        for flag in flags {
            let parsed = match flag.as_str() {
                "browse" => Mode::Browse,
                "print" => Mode::Print,
                other => {
                    return Err(HelpError::Usage(format!(
                        "Invalid associative argument --{other}."
                    )));
                }
            };
            if mode.replace(parsed).is_some() {
                return Err(HelpError::Usage(
                    "Only one of --browse or --print may be specified.".to_string(),
                ));
            }
        }
        Ok(mode.unwrap_or_default())
    }
}

/// Collaborators used by the help command.
pub struct HelpContext<'a> {
    pub config: &'a Config,
    pub runner: &'a dyn ProcessRunner,
    pub http: &'a dyn HttpClient,
    pub renderer: &'a dyn ReadmeRenderer,
    pub reporter: &'a dyn Reporter,
}

pub fn run(args: HelpArgs) -> Result<()> {
    // Argument errors win over anything config loading could report
    validate(&args.plugins, &args.mode_flags())?;

    let config = Config::load(None)?;
    let http = ReqwestClient::new(config.request_timeout)?;

    let ctx = HelpContext {
        config: &config,
        runner: &SystemRunner,
        http: &http,
        renderer: &ArticleRenderer,
        reporter: &TerminalReporter,
    };

    help(&ctx, &args.plugins, &args.mode_flags())?;
    Ok(())
}

/// Check the arguments without touching the filesystem or environment.
fn validate(plugins: &[String], flags: &[String]) -> Result<Mode, HelpError> {
    if plugins.is_empty() {
        return Err(HelpError::Usage(USAGE.to_string()));
    }
    Mode::from_flags(flags)
}

/// Show help for each plugin in `plugins`.
///
/// Argument, platform and plugin-root errors abort the command. Anything that
/// goes wrong for a single plugin is reported and the next plugin is processed.
pub fn help(ctx: &HelpContext<'_>, plugins: &[String], flags: &[String]) -> Result<(), HelpError> {
    let mode = validate(plugins, flags)?;
    // Resolved in print mode too, so unsupported platforms fail fast either way
    let launcher = Launcher::for_os(&ctx.config.os)?;

    let root = &ctx.config.plugins_root;
    paths::ensure_plugin_root(root)?;

    let installed = paths::list_plugins(root)?;
    if installed.is_empty() {
        ctx.reporter.notice("No plugins installed.");
        return Ok(());
    }

    debug!(
        ?mode,
        launcher = launcher.name(),
        installed = installed.len(),
        requested = plugins.len(),
        "help:start"
    );

    for name in plugins {
        if let Err(e) = help_one(ctx, name, mode, launcher) {
            debug!(plugin = %name, error = ?e, "help:plugin failed");
            ctx.reporter.error(&e.to_string());
        }
    }

    Ok(())
}

fn help_one(
    ctx: &HelpContext<'_>,
    name: &str,
    mode: Mode,
    launcher: Launcher,
) -> Result<(), PluginError> {
    let dir = PluginDirectory::resolve(ctx.config.platform, &ctx.config.plugins_root, name);
    if !dir.is_valid() {
        debug!(
            plugin = %dir.name,
            root = %dir.root,
            exists = dir.exists,
            has_vcs_metadata = dir.has_vcs_metadata,
            "help:plugin directory invalid"
        );
        return Err(PluginError::PluginNotFound {
            plugin: name.to_string(),
        });
    }

    let url = remote::extract_remote_readme_base(ctx.runner, &dir).unwrap_or_default();
    if !locator::is_valid_url(&url) {
        return Err(PluginError::RemoteNotFound { readme: url });
    }

    let target = ReadmeTarget::check(&url, ctx.http);
    if !target.reachable {
        return Err(PluginError::UnreachableReadme { url: target.url });
    }

    match mode {
        Mode::Browse => {
            let (program, args) = launcher.command(&target.url);
            info!(plugin = %name, url = %target.url, launcher = launcher.name(), "help:browse");
            if let Err(e) = ctx.runner.spawn(program, &args) {
                warn!(plugin = %name, error = %e, "help:launcher failed");
            }
        }
        Mode::Print => {
            let readme = render_readme(ctx.http, ctx.renderer, &target.url).map_err(|source| {
                PluginError::Render {
                    url: target.url.clone(),
                    source,
                }
            })?;
            ctx.reporter.print(&readme.to_string());
        }
    }

    Ok(())
}
