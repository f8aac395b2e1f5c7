use crate::aggregate::{Aggregator, OutputDocument, PreviewMode};
use crate::errors::ClipboardError;
use crate::policy::ExclusionPolicy;
use crate::reporting::print_summary;
use crate::sink::{deliver, ClipboardSink, Delivery};
use async_trait::async_trait;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct CopierConfig {
    pub policy: ExclusionPolicy,
    pub preview: PreviewMode,
    pub summary: bool,
}

#[async_trait]
pub trait ClipboardCopier {
    /// Reads every requested path, in order, into one document.
    async fn build_document(&self, paths: &[String]) -> OutputDocument;
}

pub struct BasicClipboardCopier {
    config: CopierConfig,
    aggregator: Aggregator,
}

impl BasicClipboardCopier {
    pub fn new(config: CopierConfig) -> Self {
        let aggregator = Aggregator::new(config.policy.clone(), config.preview);
        BasicClipboardCopier { config, aggregator }
    }

    pub async fn copy_paths_to_clipboard<S: ClipboardSink + ?Sized>(
        &self,
        paths: &[String],
        sink: &mut S,
    ) -> Result<Delivery, ClipboardError> {
        if paths.is_empty() {
            return Err(ClipboardError::NoPaths);
        }

        let document = self.build_document(paths).await;
        trace!("Final content length: {}", document.as_str().len());

        if self.config.summary && !document.is_empty() {
            print_summary(document.records());
        }

        deliver(sink, document)
    }
}

#[async_trait]
impl ClipboardCopier for BasicClipboardCopier {
    async fn build_document(&self, paths: &[String]) -> OutputDocument {
        let mut document = OutputDocument::new();
        for path in paths {
            let appended = self.aggregator.aggregate_path(path, &mut document).await;
            debug!("{} file(s) appended from {}", appended, path);
        }
        document
    }
}

pub async fn copy_paths_to_clipboard<S: ClipboardSink + ?Sized>(
    config: CopierConfig,
    paths: &[String],
    sink: &mut S,
) -> Result<Delivery, ClipboardError> {
    let copier = BasicClipboardCopier::new(config);
    copier.copy_paths_to_clipboard(paths, sink).await
}
