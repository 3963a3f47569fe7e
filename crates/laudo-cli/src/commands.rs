use std::io::Write;
use std::path::Path;

use eyre::Result;
use laudo_auth::authorizer::{Authorizer, RoleAuthorizer};
use laudo_auth::roles::{Permission, default_roles};
use laudo_core::models::narrative::NarrativeGenerator;
use laudo_core::models::report::parse_report_id;
use laudo_engine::assemble::ReportAssembler;
use laudo_engine::narrative::{narrate, render_narrative};
use laudo_engine::rules::SelectionRules;
use laudo_engine::session::Session;
use laudo_export::docx::generate_docx;
use laudo_export::paginate::paginate;
use laudo_export::render::render_template;
use laudo_export::styles::{DocumentStyles, PageLayout};
use laudo_knowledge::KnowledgeBase;
use laudo_narrative::ollama::OllamaGenerator;
use laudo_storage::history::ReportHistory;
use tracing::{info, warn};

use crate::cli::{Commands, ConfigCommands, HistoryCommands};
use crate::config::{LaudoConfig, save_config};
use crate::script::SessionScript;

/// Everything a command needs: loaded config plus the shared catalogue.
pub struct App {
    pub config: LaudoConfig,
    pub config_path: std::path::PathBuf,
    pub kb: &'static KnowledgeBase,
}

/// Options of `laudo generate`.
#[derive(Debug, Default)]
pub struct GenerateOptions<'a> {
    pub save: bool,
    pub title: Option<&'a str>,
    pub docx: Option<&'a Path>,
    pub narrative: bool,
    pub template: Option<&'a Path>,
}

impl App {
    pub fn new(config: LaudoConfig, config_path: std::path::PathBuf) -> Self {
        Self {
            config,
            config_path,
            kb: KnowledgeBase::global(),
        }
    }

    fn authorizer(&self) -> Result<RoleAuthorizer> {
        Ok(RoleAuthorizer::for_roles(default_roles(), &[self.config.role.as_str()])?)
    }

    fn history(&self) -> Result<ReportHistory> {
        Ok(ReportHistory::in_dir(self.config.resolved_data_dir()?))
    }

    pub fn run(&self, command: &Commands, out: &mut dyn Write) -> Result<()> {
        match command {
            Commands::Exams => self.list_exams(out),
            Commands::Show { exam } => self.show_exam(exam, out),
            Commands::Generate {
                script,
                save,
                title,
                docx,
                narrative,
                template,
            } => self.generate(
                script,
                &GenerateOptions {
                    save: *save,
                    title: title.as_deref(),
                    docx: docx.as_deref(),
                    narrative: *narrative,
                    template: template.as_deref(),
                },
                out,
            ),
            Commands::History { action } => self.history_command(action, out),
            Commands::Paginate {
                id,
                chars_per_line,
                lines_per_page,
            } => self.paginate_report(
                id,
                &PageLayout {
                    chars_per_line: *chars_per_line,
                    lines_per_page: *lines_per_page,
                },
                out,
            ),
            Commands::Config { action } => self.config_command(action, out),
        }
    }

    pub fn list_exams(&self, out: &mut dyn Write) -> Result<()> {
        for name in self.kb.list_exam_types() {
            let exam = self.kb.exam(name)?;
            writeln!(out, "{:<26} {}", exam.id(), exam.name())?;
        }
        Ok(())
    }

    pub fn show_exam(&self, exam_type: &str, out: &mut dyn Write) -> Result<()> {
        let exam = self.kb.exam(exam_type)?;
        writeln!(out, "{} ({})", exam.name(), exam.id())?;
        writeln!(out, "Técnica: {}", exam.technique())?;

        for category in exam.categories() {
            writeln!(out)?;
            writeln!(out, "{}", category.name)?;
            for finding in &category.findings {
                let mut flags = Vec::new();
                if finding.is_normal_variant {
                    flags.push("normal");
                }
                if finding.requires_size {
                    flags.push("tamanho");
                }
                if finding.has_laterality {
                    flags.push("lateralidade");
                }
                if finding.has_quantity {
                    flags.push("quantidade");
                }
                let flags = if flags.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", flags.join(", "))
                };
                writeln!(out, "  {:<28} {}{flags}", finding.id, finding.label)?;
            }
        }
        Ok(())
    }

    /// Replay a session script and print the resulting report.
    pub fn generate(&self, script_path: &Path, options: &GenerateOptions<'_>, out: &mut dyn Write) -> Result<()> {
        if options.save {
            self.authorizer()?.require(Permission::CreateReports)?;
        }

        let script = SessionScript::load(script_path)?;
        let rules = SelectionRules::new(self.kb);
        let mut session = Session::start(self.kb, &script.exam_type)?;
        session.apply_all(&rules, &script.actions)?;

        let mut header = script.header.clone();
        if header.doctor_name.trim().is_empty() {
            header.doctor_name = self.config.doctor_name.clone();
        }
        if header.doctor_crm.trim().is_empty() {
            header.doctor_crm = self.config.doctor_crm.clone();
        }

        let assembled = ReportAssembler::new(self.kb).assemble(Some(session.exam_type()), &header, session.store())?;

        let text = if options.narrative {
            let generator = self.narrative_generator();
            let request = assembled.narrative_request(script.age, script.clinical_indication.clone());
            let narrative = narrate(
                generator.as_ref().map(|g| g as &dyn NarrativeGenerator),
                &request,
                &assembled,
            );
            render_narrative(&assembled, &narrative)
        } else if let Some(template_path) = options.template {
            let template = std::fs::read_to_string(template_path)
                .map_err(|e| eyre::eyre!("failed to read template {}: {e}", template_path.display()))?;
            let name = template_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("letterhead.txt");
            render_template(name, &template, &assembled)?
        } else {
            assembled.render_text()
        };

        write!(out, "{text}")?;

        if let Some(path) = options.docx {
            let bytes = generate_docx(&text, &DocumentStyles::default())?;
            std::fs::write(path, bytes)?;
            info!(path = %path.display(), "DOCX written");
        }

        if options.save {
            let stored = self.history()?.save(options.title, session.exam_type(), &text)?;
            eprintln!("Laudo salvo: {} ({})", stored.title, stored.id);
        }
        Ok(())
    }

    fn narrative_generator(&self) -> Option<OllamaGenerator> {
        if !self.config.narrative.enabled {
            warn!("narrative generation is disabled in config, using assembled report");
            return None;
        }
        Some(OllamaGenerator::new(self.config.narrative.ollama()))
    }

    pub fn history_command(&self, action: &HistoryCommands, out: &mut dyn Write) -> Result<()> {
        let auth = self.authorizer()?;
        let history = self.history()?;

        match action {
            HistoryCommands::List => {
                auth.require(Permission::ViewReports)?;
                for report in history.list()? {
                    writeln!(
                        out,
                        "{}  {}  {:<32}  {}",
                        report.id,
                        report.created_at.strftime("%Y-%m-%d %H:%M"),
                        report.exam_type,
                        report.title
                    )?;
                }
            }
            HistoryCommands::Show { id } => {
                auth.require(Permission::ViewReports)?;
                let report = history.get(parse_report_id(id)?)?;
                write!(out, "{}", report.content)?;
            }
            HistoryCommands::Update { id, file } => {
                auth.require(Permission::EditReports)?;
                let content = std::fs::read_to_string(file)
                    .map_err(|e| eyre::eyre!("failed to read {}: {e}", file.display()))?;
                let report = history.update(parse_report_id(id)?, &content)?;
                writeln!(out, "Laudo atualizado: {}", report.id)?;
            }
            HistoryCommands::Delete { id } => {
                auth.require(Permission::DeleteReports)?;
                let id = parse_report_id(id)?;
                history.delete(id)?;
                writeln!(out, "Laudo excluído: {id}")?;
            }
        }
        Ok(())
    }

    pub fn paginate_report(&self, id: &str, layout: &PageLayout, out: &mut dyn Write) -> Result<()> {
        self.authorizer()?.require(Permission::ViewReports)?;
        let report = self.history()?.get(parse_report_id(id)?)?;

        let pages = paginate(&report.content, layout);
        let total = pages.len();
        for page in pages {
            writeln!(out, "--- Página {}/{total} ---", page.number)?;
            for line in page.lines {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }

    pub fn config_command(&self, action: &ConfigCommands, out: &mut dyn Write) -> Result<()> {
        match action {
            ConfigCommands::Show => {
                writeln!(out, "# {}", self.config_path.display())?;
                writeln!(out, "{}", serde_json::to_string_pretty(&self.config)?)?;
            }
            ConfigCommands::Init { force } => {
                if self.config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "{} already exists (use --force to overwrite)",
                        self.config_path.display()
                    ));
                }
                save_config(&LaudoConfig::default(), &self.config_path)?;
                writeln!(out, "{}", self.config_path.display())?;
            }
        }
        Ok(())
    }
}
