//! XLSX report with the full listing, per-type totals and an overview.

use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};

use ret_core::{AggregateSummary, Record};

const HEADER_COLOR: u32 = 0x1F4788;
const NUMBER_FORMAT: &str = "#,##0.00";

const RECORD_COLUMNS: [(&str, f64); 9] = [
    ("Tipo de Encargo", 15.0),
    ("Empresa", 20.0),
    ("Nota Débito/Crédito", 20.0),
    ("Nº", 15.0),
    ("Data Vencimento", 15.0),
    ("Valor Total", 15.0),
    ("QT", 15.0),
    ("Valor Unitário", 15.0),
    ("Arquivo", 40.0),
];

struct Styles {
    header: Format,
    number: Format,
    title: Format,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(HEADER_COLOR))
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
            number: Format::new().set_num_format(NUMBER_FORMAT),
            title: Format::new()
                .set_bold()
                .set_font_size(14)
                .set_align(FormatAlign::Center),
        }
    }
}

/// Write the three-sheet report to `path`, replacing any existing file.
pub fn write_report(
    path: &Path,
    records: &[Record],
    summary: &AggregateSummary,
    currency: &str,
    processed_at: &str,
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let styles = Styles::new();

    let sheet = workbook.add_worksheet().set_name("Dados Completos")?;
    write_records(sheet, records, &styles)?;

    let sheet = workbook.add_worksheet().set_name("Resumo por Tipo")?;
    write_type_summary(sheet, summary, &styles)?;

    let sheet = workbook.add_worksheet().set_name("Resumo Geral")?;
    write_overview(sheet, summary, currency, processed_at, &styles)?;

    workbook.save(path)
}

fn write_records(sheet: &mut Worksheet, records: &[Record], styles: &Styles) -> Result<(), XlsxError> {
    for (col, (title, width)) in RECORD_COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *title, &styles.header)?;
        sheet.set_column_width(col, *width)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, record.document_type.label())?;
        sheet.write_string(row, 1, &record.company)?;
        sheet.write_string(row, 2, record.note_kind.label())?;
        sheet.write_string(row, 3, &record.note_number)?;
        sheet.write_string(row, 4, &record.due_date)?;
        sheet.write_number_with_format(row, 5, real(record.total_value), &styles.number)?;
        sheet.write_number_with_format(row, 6, real(record.quantity), &styles.number)?;
        sheet.write_number_with_format(row, 7, real(record.unit_value), &styles.number)?;
        sheet.write_string(row, 8, record.file_name())?;
    }

    Ok(())
}

fn write_type_summary(
    sheet: &mut Worksheet,
    summary: &AggregateSummary,
    styles: &Styles,
) -> Result<(), XlsxError> {
    let headers = ["Tipo de Encargo", "Quantidade de Arquivos", "QT", "Valor Total"];
    for (col, title) in headers.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *title, &styles.header)?;
        sheet.set_column_width(col, 22)?;
    }

    for (i, group) in summary.per_type.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, group.document_type.label())?;
        sheet.write_number(row, 1, group.count as f64)?;
        sheet.write_number_with_format(row, 2, real(group.quantity), &styles.number)?;
        sheet.write_number_with_format(row, 3, real(group.sum), &styles.number)?;
    }

    Ok(())
}

fn write_overview(
    sheet: &mut Worksheet,
    summary: &AggregateSummary,
    currency: &str,
    processed_at: &str,
    styles: &Styles,
) -> Result<(), XlsxError> {
    sheet.merge_range(0, 0, 0, 1, "RESUMO GERAL", &styles.title)?;
    sheet.set_column_width(0, 35)?;
    sheet.set_column_width(1, 25)?;

    sheet.write_string_with_format(2, 0, "Métrica", &styles.header)?;
    sheet.write_string_with_format(2, 1, "Valor", &styles.header)?;

    sheet.write_string(3, 0, "Total de PDFs Processados")?;
    sheet.write_number(3, 1, summary.document_count as f64)?;

    sheet.write_string(4, 0, "Quantidade Total (QT)")?;
    sheet.write_number_with_format(4, 1, real(summary.total_quantity), &styles.number)?;

    sheet.write_string(5, 0, format!("Valor Total ({})", currency))?;
    sheet.write_number_with_format(5, 1, real(summary.grand_total), &styles.number)?;

    sheet.write_string(6, 0, "Data do Processamento")?;
    sheet.write_string(6, 1, processed_at)?;

    Ok(())
}

fn real(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
