//! Per-page results and the text summary

use pagediff_core::Region;
use std::fmt::Write;

/// Result of comparing one page of a document pair
#[derive(Debug, Clone, PartialEq)]
pub struct DiffReport {
    /// 0-based page index
    pub page_index: u32,
    /// Whether any pixel differs beyond the threshold
    pub has_differences: bool,
    /// Share of unchanged pixels, in `0.0..=100.0`
    pub similarity_percent: f64,
    /// Encoded overlay (PNG unless another encoder is configured)
    pub overlay_image: Vec<u8>,
    /// Merged change regions
    pub regions: Vec<Region>,
    /// Number of differing pixels in the raw mask
    pub differing_pixels: u64,
    /// Canvas width after reconciliation
    pub width: u32,
    /// Canvas height after reconciliation
    pub height: u32,
}

impl DiffReport {
    /// `DIFFERENCES` or `OK`
    pub fn status(&self) -> &'static str {
        if self.has_differences {
            "DIFFERENCES"
        } else {
            "OK"
        }
    }
}

/// Header data of the text summary
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReportHeader<'a> {
    pub name_a: Option<&'a str>,
    pub name_b: Option<&'a str>,
    pub pages_a: u32,
    pub pages_b: u32,
}

/// Render the fixed-shape text summary, lines joined by `\n`
pub(crate) fn format_report(header: &ReportHeader<'_>, reports: &[DiffReport]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write!(
        out,
        "=== Diff Report ===\n\
         Document A: {}\n\
         Document B: {}\n\
         Pages A: {}\n\
         Pages B: {}\n\
         \n\
         Page differences:",
        header.name_a.unwrap_or("N/A"),
        header.name_b.unwrap_or("N/A"),
        header.pages_a,
        header.pages_b,
    );
    for report in reports {
        let _ = write!(
            out,
            "\n  Page {}: {} (similarity: {:.1}%)",
            report.page_index + 1,
            report.status(),
            report.similarity_percent
        );
    }
    out
}
