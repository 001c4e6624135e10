use chrono::{DateTime, Utc};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::report::application::domain::{
    EventAssignmentReport, ReportKind, VolunteerActivityRow,
};
use crate::report::application::ports::outgoing::ReportRenderError;
use crate::shared::domain::datetime::to_iso_string;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const BODY_SIZE: f32 = 10.0;
const LINE_HEIGHT: f32 = 5.5;

/// Column start (mm from the left margin) and the characters that fit in it.
struct Column {
    label: &'static str,
    offset: f32,
    max_chars: usize,
}

const ACTIVITY_COLUMNS: [Column; 5] = [
    Column { label: "Volunteer", offset: 0.0, max_chars: 20 },
    Column { label: "Email", offset: 33.0, max_chars: 30 },
    Column { label: "Event", offset: 82.0, max_chars: 30 },
    Column { label: "Date (UTC)", offset: 131.0, max_chars: 16 },
    Column { label: "Minutes", offset: 164.0, max_chars: 7 },
];

const VOLUNTEER_COLUMNS: [Column; 4] = [
    Column { label: "Volunteer", offset: 0.0, max_chars: 26 },
    Column { label: "Email", offset: 45.0, max_chars: 40 },
    Column { label: "Date (UTC)", offset: 112.0, max_chars: 16 },
    Column { label: "Minutes", offset: 157.0, max_chars: 7 },
];

fn pdf_err(e: impl std::fmt::Display) -> ReportRenderError {
    ReportRenderError::Pdf(e.to_string())
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}

fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Writes top-down and opens a new page when the bottom margin is reached.
struct Canvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    cursor: f32,
    footer: String,
}

impl Canvas {
    fn open(kind: ReportKind, generated_at: DateTime<Utc>) -> Result<Self, ReportRenderError> {
        let (doc, page, layer) =
            PdfDocument::new(kind.title(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut canvas = Self {
            doc,
            layer,
            regular,
            bold,
            cursor: PAGE_HEIGHT - MARGIN,
            footer: format!("Generated at: {}", to_iso_string(&generated_at)),
        };
        canvas.write_footer();
        canvas.text_centered(kind.title(), 18.0);
        canvas.cursor -= 4.0;
        Ok(canvas)
    }

    fn write_footer(&self) {
        self.layer.use_text(
            self.footer.clone(),
            8.0,
            Mm(PAGE_WIDTH - MARGIN - 70.0),
            Mm(MARGIN / 2.0),
            &self.regular,
        );
    }

    fn ensure_room(&mut self, height: f32) {
        if self.cursor - height >= MARGIN {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = PAGE_HEIGHT - MARGIN;
        self.write_footer();
    }

    fn text(&mut self, x: f32, text: &str, size: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, size, Mm(MARGIN + x), Mm(self.cursor), font);
    }

    fn text_centered(&mut self, text: &str, size: f32) {
        // Helvetica averages about half an em per glyph.
        let width_mm = text.chars().count() as f32 * size * 0.5 * 0.3528;
        let x = ((PAGE_WIDTH - 2.0 * MARGIN - width_mm) / 2.0).max(0.0);
        self.ensure_room(size * 0.5);
        self.text(x, text, size, true);
        self.cursor -= size * 0.5;
    }

    fn line(&mut self, text: &str, size: f32, bold: bool) {
        self.ensure_room(LINE_HEIGHT);
        self.text(0.0, text, size, bold);
        self.cursor -= LINE_HEIGHT;
    }

    fn table_row(&mut self, columns: &[Column], cells: &[String], bold: bool) {
        self.ensure_room(LINE_HEIGHT);
        for (column, cell) in columns.iter().zip(cells) {
            let text = clip(cell, column.max_chars);
            self.text(column.offset, &text, BODY_SIZE, bold);
        }
        self.cursor -= LINE_HEIGHT;
    }

    fn table_header(&mut self, columns: &[Column]) {
        let labels: Vec<String> = columns.iter().map(|c| c.label.to_string()).collect();
        self.table_row(columns, &labels, true);
    }

    fn gap(&mut self, height: f32) {
        self.cursor -= height;
    }

    fn finish(self) -> Result<Vec<u8>, ReportRenderError> {
        self.doc.save_to_bytes().map_err(pdf_err)
    }
}

pub(super) fn volunteer_activity(
    rows: &[VolunteerActivityRow],
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, ReportRenderError> {
    let mut canvas = Canvas::open(ReportKind::VolunteerActivity, generated_at)?;

    canvas.table_header(&ACTIVITY_COLUMNS);
    for row in rows {
        canvas.table_row(
            &ACTIVITY_COLUMNS,
            &[
                row.full_name.clone(),
                row.email.clone(),
                row.event_name.clone(),
                short_date(&row.event_date_utc),
                row.duration_minutes.to_string(),
            ],
            false,
        );
    }

    canvas.finish()
}

pub(super) fn event_assignments(
    reports: &[EventAssignmentReport],
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, ReportRenderError> {
    let mut canvas = Canvas::open(ReportKind::EventAssignments, generated_at)?;

    for report in reports {
        canvas.ensure_room(LINE_HEIGHT * 4.0);
        canvas.line(&report.event_name, 14.0, true);
        canvas.line(
            &format!(
                "{} UTC  |  {}  |  {}",
                short_date(&report.event_date_utc),
                report.location,
                report.urgency
            ),
            BODY_SIZE,
            false,
        );

        if !report.required_skills.is_empty() {
            canvas.line(
                &format!("Skills: {}", report.required_skills.join(", ")),
                BODY_SIZE,
                false,
            );
        }

        if report.volunteers.is_empty() {
            canvas.line("No volunteers recorded.", BODY_SIZE, false);
        } else {
            canvas.gap(1.5);
            canvas.table_header(&VOLUNTEER_COLUMNS);
            for volunteer in &report.volunteers {
                canvas.table_row(
                    &VOLUNTEER_COLUMNS,
                    &[
                        volunteer.full_name.clone(),
                        volunteer.email.clone(),
                        short_date(&volunteer.participation_date_utc),
                        volunteer.duration_minutes.to_string(),
                    ],
                    false,
                );
            }
        }

        canvas.gap(6.0);
    }

    canvas.finish()
}
