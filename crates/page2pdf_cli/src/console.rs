use page2pdf_engine::{PipelineEvent, Reporter};

/// Prints one line per pipeline event to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, event: PipelineEvent) {
        println!("{}", format_event(&event));
    }
}

pub fn format_event(event: &PipelineEvent) -> String {
    match event {
        PipelineEvent::SingleStarted { url } => format!("Processing single URL: {url}"),
        PipelineEvent::ItemStarted { index, url } => format!("Processing URL {index}: {url}"),
        PipelineEvent::FetchFailed { error, .. } if error.is_access_failure() => {
            format!("Error: {error}")
        }
        PipelineEvent::FetchFailed { error, .. } => {
            format!("Error fetching the webpage: {error}")
        }
        PipelineEvent::Saved { path, .. } => format!("Content saved to {}", path.display()),
        PipelineEvent::Skipped { index } => {
            format!("Skipping URL {index} due to access restrictions.")
        }
        PipelineEvent::RenderFailed {
            index,
            path,
            message,
        } => format!(
            "Skipping URL {index}: could not save {}: {message}",
            path.display()
        ),
    }
}
