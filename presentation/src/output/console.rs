//! Console output formatter

use crate::output::formatter::{JsonFormatter, OutputFormatter};
use colored::Colorize;
use termbridge_domain::{
    AggregateResult, BulkMappingReport, CanonicalTerm, CodeableConcept, Condition, MappingMethod,
    MappingResult, SearchStatus, TerminologySystem,
};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a search envelope
    pub fn format_search(result: &AggregateResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Terminology Search"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n{} {}\n",
            "Query:".cyan().bold(),
            result.query,
            "Source:".cyan().bold(),
            result.scope
        ));

        if result.scope.includes_local() {
            output.push_str(&Self::section_header(&format!(
                "NAMASTE ({})",
                result.local_results.len()
            )));
            for term in &result.local_results {
                output.push_str(&Self::term_line(term));
            }
        }

        if result.scope.includes_remote() {
            output.push_str(&Self::section_header(&format!(
                "ICD-11 ({})",
                result.remote_results.len()
            )));
            for term in &result.remote_results {
                output.push_str(&Self::term_line(term));
            }
        }

        let status = match result.status {
            SearchStatus::Success => "success".green().bold(),
            SearchStatus::NoResults => "no results".yellow().bold(),
            SearchStatus::Error => "error".red().bold(),
        };
        output.push_str(&format!(
            "\n{} {} ({} results in {} ms)\n",
            "Status:".cyan().bold(),
            status,
            result.total_count,
            result.elapsed_millis
        ));
        if let Some(message) = &result.message {
            output.push_str(&format!("{}\n", message.dimmed()));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a single mapping
    pub fn format_mapping(mapping: &MappingResult, concept: Option<&CodeableConcept>) -> String {
        let mut output = String::new();
        let local = &mapping.local_term;

        output.push_str(&Self::header("NAMASTE → ICD-11 Mapping"));
        output.push('\n');
        output.push_str(&format!(
            "{} {} {}\n",
            "Term:".cyan().bold(),
            local.id.yellow(),
            local.term
        ));
        if let Some(hindi) = &local.term_hindi {
            output.push_str(&format!("{} {}\n", "Hindi:".cyan().bold(), hindi));
        }
        output.push_str(&format!(
            "{} {} (confidence {:.2})\n",
            "Method:".cyan().bold(),
            Self::method(mapping.mapping_method),
            mapping.confidence_score
        ));

        output.push_str(&Self::section_header("ICD-11 matches"));
        if mapping.remote_matches.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for remote in &mapping.remote_matches {
            output.push_str(&format!("  {} {}\n", remote.code.yellow(), remote.title));
        }

        if let Some(concept) = concept {
            output.push_str(&Self::section_header("FHIR CodeableConcept"));
            output.push_str(&Self::indent(&JsonFormatter::to_json(concept), "  "));
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    /// FHIR resources are JSON documents; text mode only adds a heading
    pub fn format_condition(condition: &Condition) -> String {
        format!(
            "{} {}\n{}\n",
            "FHIR Condition".cyan().bold(),
            condition.id.dimmed(),
            JsonFormatter::to_json(condition)
        )
    }

    /// Format a bulk mapping report
    pub fn format_bulk(report: &BulkMappingReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Bulk Mapping"));
        output.push('\n');
        for mapping in &report.mappings {
            let best = mapping
                .remote_matches
                .first()
                .map(|m| format!("{} {}", m.code, m.title))
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "  {:<10} {:<28} {:<14} {:.2}  {}\n",
                mapping.local_term.id,
                mapping.local_term.term,
                Self::method(mapping.mapping_method),
                mapping.confidence_score,
                best
            ));
        }
        if !report.missing.is_empty() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Not found:".red().bold(),
                report.missing.join(", ")
            ));
        }

        let s = &report.summary;
        output.push_str(&format!(
            "\n{} {} processed: {} exact, {} partial, {} fuzzy, {} none, {} errors\n",
            "Summary:".cyan().bold(),
            report.total_processed,
            s.exact_matches,
            s.partial_matches,
            s.fuzzy_matches,
            s.no_matches,
            s.errors
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format the supported terminology systems
    pub fn format_systems(systems: &[TerminologySystem]) -> String {
        let mut output = String::new();
        for system in systems {
            output.push_str(&format!(
                "{} {} ({})\n  {}\n  {}\n\n",
                system.name.yellow().bold(),
                system.version,
                system.full_name,
                system.url.dimmed(),
                system.description
            ));
        }
        output
    }

    fn term_line(term: &CanonicalTerm) -> String {
        let label = term.code.as_deref().unwrap_or(term.id.as_str());
        let mut line = format!("  {} {}", label.yellow(), term.title);
        if let Some(system) = &term.origin_system {
            line.push_str(&format!(" {}", format!("[{}]", system).dimmed()));
        }
        line.push('\n');
        line
    }

    fn method(method: MappingMethod) -> colored::ColoredString {
        match method {
            MappingMethod::ExactMatch => method.as_str().green(),
            MappingMethod::PartialMatch | MappingMethod::FuzzyMatch => method.as_str().yellow(),
            MappingMethod::NoMatch => method.as_str().dimmed(),
            MappingMethod::Error => method.as_str().red(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_search(&self, result: &AggregateResult) -> String {
        Self::format_search(result)
    }

    fn format_mapping(
        &self,
        mapping: &MappingResult,
        concept: Option<&CodeableConcept>,
    ) -> String {
        Self::format_mapping(mapping, concept)
    }

    fn format_condition(&self, condition: &Condition) -> String {
        Self::format_condition(condition)
    }

    fn format_bulk(&self, report: &BulkMappingReport) -> String {
        Self::format_bulk(report)
    }

    fn format_systems(&self, systems: &[TerminologySystem]) -> String {
        Self::format_systems(systems)
    }
}
