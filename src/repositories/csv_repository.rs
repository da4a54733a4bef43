use log::info;

use crate::models::ValidatorApyRow;

pub fn save_apy_rows(output_csv: &str, rows: &[ValidatorApyRow]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(output_csv)?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("Saved {} validator rows to {}", rows.len(), output_csv);
    Ok(())
}
