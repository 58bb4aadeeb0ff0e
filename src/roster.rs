use std::path::Path;

use anyhow::Context;

use crate::models::{Change, Record};

/// Frozen snapshot of the leaderboard roster.
pub fn builtin() -> Vec<Record> {
    let rows = [
        ("Fatima Al-Sayed", "Corporate Banking", 75, 98, 5, Change::Up, "December 10, 2024"),
        ("Raj Patel", "Investment Banking", 62, 95, 4, Change::Down, "November 28, 2024"),
        ("Amr Hassan", "Retail Banking", 80, 92, 4, Change::Same, "December 5, 2024"),
        ("Zainab Mahmoud", "Risk Management", 70, 97, 5, Change::Up, "November 15, 2024"),
        ("Priya Sharma", "Wealth Management", 85, 90, 3, Change::Down, "October 30, 2024"),
        ("Omar Farouk", "Treasury", 68, 96, 4, Change::Up, "November 22, 2024"),
        ("Aisha Abdullah", "Compliance", 72, 99, 5, Change::Same, "December 8, 2024"),
        ("Vikram Singh", "IT Operations", 65, 93, 4, Change::Down, "November 7, 2024"),
        ("Laila El-Masry", "Customer Service", 90, 88, 3, Change::Up, "October 25, 2024"),
        ("Mohammed Al-Hashimi", "Islamic Banking", 78, 94, 4, Change::Down, "November 19, 2024"),
        ("Sara Khalil", "Human Resources", 66, 95, 5, Change::Up, "December 2, 2024"),
        ("Hassan Qureshi", "Digital Banking", 74, 91, 4, Change::Same, "November 12, 2024"),
        ("Noura Al-Mansoori", "Marketing", 82, 89, 4, Change::Up, "October 18, 2024"),
        ("Arjun Mehta", "Finance", 69, 97, 4, Change::Down, "November 30, 2024"),
        ("Mariam Youssef", "Legal", 77, 87, 5, Change::Same, "December 1, 2024"),
        ("Khalid Rahman", "Operations", 71, 90, 4, Change::Up, "November 3, 2024"),
        ("Deepa Nair", "Data Analytics", 63, 86, 3, Change::Down, "October 21, 2024"),
        ("Youssef Haddad", "Procurement", 88, 85, 4, Change::Up, "November 25, 2024"),
        ("Ananya Iyer", "Audit", 70, 92, 5, Change::Same, "December 6, 2024"),
        ("Tariq Aziz", "Cards & Payments", 76, 84, 3, Change::Down, "October 14, 2024"),
    ];

    rows.into_iter()
        .map(
            |(name, department, speed, accuracy, engagement, change, completed)| Record {
                name: name.to_string(),
                department: department.to_string(),
                speed,
                accuracy,
                engagement,
                change,
                completion_date: Some(completed.to_string()),
            },
        )
        .collect()
}

pub fn load_csv(csv_path: &Path) -> anyhow::Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open roster {}", csv_path.display()))?;
    let mut records = Vec::new();

    for (index, result) in reader.deserialize::<Record>().enumerate() {
        let mut record = result.with_context(|| {
            format!("invalid roster row {} in {}", index + 1, csv_path.display())
        })?;
        record.completion_date = record.completion_date.filter(|date| !date.is_empty());
        records.push(record);
    }

    log::debug!("loaded {} records from {}", records.len(), csv_path.display());
    Ok(records)
}

pub fn write_csv(records: &[Record], csv_path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(csv_path)
        .with_context(|| format!("failed to create {}", csv_path.display()))?;

    writer.write_record([
        "name",
        "department",
        "speed",
        "accuracy",
        "engagement",
        "change",
        "completion_date",
    ])?;

    for record in records {
        writer.write_record([
            record.name.as_str(),
            record.department.as_str(),
            record.speed.to_string().as_str(),
            record.accuracy.to_string().as_str(),
            record.engagement.to_string().as_str(),
            record.change.as_str(),
            record.completion_date.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
