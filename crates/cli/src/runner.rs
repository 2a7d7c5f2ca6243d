// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel document runner.
//!
//! Each document is extracted and evaluated on its own rayon task. Results
//! are reassembled in input order, so the report never depends on
//! scheduling.

use rayon::prelude::*;

use crate::document::Document;
use crate::error::ParseError;
use crate::evaluate::{LabelFilter, evaluate_document};
use crate::extract::Extractor;
use crate::finding::Finding;
use crate::report::Report;
use crate::rules::RuleSet;
use crate::source::Source;

/// Settings shared by every document in a run.
pub struct Runner<'a> {
    extractor: &'a Extractor,
    rules: &'a RuleSet,
    filter: &'a LabelFilter,
}

/// Extracted documents and the report built from them.
pub struct RunOutput {
    pub documents: Vec<Document>,
    pub report: Report,
}

impl<'a> Runner<'a> {
    pub fn new(extractor: &'a Extractor, rules: &'a RuleSet, filter: &'a LabelFilter) -> Self {
        Self { extractor, rules, filter }
    }

    /// Run the pipeline over every source.
    ///
    /// If any document fails to parse, the error for the earliest such
    /// document is returned and no report is built.
    pub fn run(&self, sources: &[Source]) -> Result<RunOutput, ParseError> {
        let results: Vec<Result<(Document, Vec<Finding>), ParseError>> = sources
            .par_iter()
            .enumerate()
            .map(|(id, source)| self.run_one(id, source))
            .collect();

        let mut documents = Vec::with_capacity(results.len());
        let mut findings = Vec::new();
        for result in results {
            let (document, mut document_findings) = result?;
            documents.push(document);
            findings.append(&mut document_findings);
        }

        let report = Report::new(findings, sources.len());
        Ok(RunOutput { documents, report })
    }

    fn run_one(&self, id: usize, source: &Source) -> Result<(Document, Vec<Finding>), ParseError> {
        let text = source
            .content
            .as_str()
            .ok_or_else(|| ParseError::InvalidEncoding { path: source.name.clone() })?;
        let document = self.extractor.extract(&source.name, text)?.with_id(id);
        let findings = evaluate_document(self.rules, &document, self.filter);
        Ok((document, findings))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
