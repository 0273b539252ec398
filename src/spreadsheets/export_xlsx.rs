use crate::errors::ExportError;
use crate::repository::Snapshot;
use rust_xlsxwriter::Workbook;

const HEADERS: [&str; 7] = [
    "Address",
    "Type",
    "Price",
    "Status",
    "Added",
    "Bedrooms",
    "Business Type",
];

/// Renders the snapshot as a single-sheet workbook and returns the file bytes.
pub fn export_listings_xlsx(snapshot: &Snapshot) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Listings")?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, listing) in snapshot.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet.write_string(r, 0, listing.address())?;
        worksheet.write_string(r, 1, listing.kind_label())?;
        worksheet.write_number(r, 2, listing.price() as f64)?;
        worksheet.write_string(r, 3, listing.status().as_str())?;
        worksheet.write_string(
            r,
            4,
            listing.listed_at().format("%Y-%m-%d %H:%M:%S").to_string(),
        )?;

        // Blank cells for the field the other variant carries.
        if let Some(bedrooms) = listing.bedrooms() {
            worksheet.write_number(r, 5, f64::from(bedrooms))?;
        }
        if let Some(business_type) = listing.business_type() {
            worksheet.write_string(r, 6, business_type)?;
        }
    }

    let buffer = workbook.save_to_buffer()?;
    Ok(buffer)
}
