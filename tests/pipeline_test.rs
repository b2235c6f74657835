use anyhow::Result;
use catalog_pricing::config::Config;
use catalog_pricing::pipeline::{Pipeline, ReportOutcome};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const MPU_TABLE: &str = concat!(
    "<table border=\"1\" cellpadding=\"5\" style=\"text-align: center; border-collapse: collapse; border: 1px #E8E8E8 solid;\">",
    "<tbody>",
    "<tr><td><strong>Quantity</strong></td><td><strong>Unit Price (USD)</strong></td></tr>",
    "<tr><td>1-99</td><td>1.00</td></tr>",
    "<tr><td>100-499</td><td>2.00</td></tr>",
    "<tr><td>500-999</td><td>3.00</td></tr>",
    "<tr><td>1000+</td><td><a href=\"mailto:eSupport@nuvoton.com\" target=\"_blank\">Contact</a></td></tr>",
    "</tbody>",
    "</table>"
);

const CATALOG_HEADER: &str = "ID,Name,New Base Price,Short Description-EN,Short Description-TW,Short Description-DE,Short Description-KR,Short Description-JA,Short Description-CN,Original Base Price";
const DISCOUNT_HEADER: &str = "ID,Name,Starting at Tier 1,Price Reduction Tier 1,Starting at Tier 2,Price Reduction Tier 2,Type,Tax";

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn price_row(core: &str, name: &str, prices: [&str; 5], d1: &str, d2: &str) -> String {
    let mut cols = vec![core.to_string(), "series".to_string(), name.to_string()];
    cols.extend(prices.iter().map(|p| p.to_string()));
    while cols.len() < 15 {
        cols.push(String::new());
    }
    cols.push(d1.to_string());
    cols.push(d2.to_string());
    cols.join(",")
}

fn write_inputs(folder: &Path, update: &[&str], direct: &[&str], prices: &[String]) -> Result<()> {
    let mut update_csv = String::from("No,Product\n");
    for (i, name) in update.iter().enumerate() {
        update_csv.push_str(&format!("{},{}\n", i + 1, name));
    }
    fs::write(folder.join("1_price_update.csv"), update_csv)?;

    let mut direct_csv = String::from("ID,Name,Type,Status,Visible,Base Price\n");
    for line in direct {
        direct_csv.push_str(line);
        direct_csv.push('\n');
    }
    fs::write(folder.join("2_product_in_direct.csv"), direct_csv)?;

    let header = (1..=17).map(|i| format!("c{i}")).collect::<Vec<_>>().join(",");
    let mut price_csv = format!("{header}\n");
    for line in prices {
        price_csv.push_str(line);
        price_csv.push('\n');
    }
    fs::write(folder.join("3_product_new_price.csv"), price_csv)?;
    Ok(())
}

#[test]
fn test_end_to_end_widget() -> Result<()> {
    let dir = tempdir()?;
    write_inputs(
        dir.path(),
        &["WidgetA"],
        &["123,WidgetA,simple,1,1,9.99"],
        &[price_row("MPU", "WidgetA", ["1.00", "2.00", "3.00", "", ""], "10%", "20%")],
    )?;

    let config = Config::with_folder(dir.path());
    let result = Pipeline::run(&config);
    assert!(result.input_failures.is_empty());
    assert!(result.catalog_update.is_written());
    assert!(result.combined_discount.is_written());

    let table = quoted(MPU_TABLE);
    let expected_catalog = format!(
        "{CATALOG_HEADER}\n123,WidgetA,1.00,{t},{t},{t},{t},{t},{t},9.99\n",
        t = table
    );
    assert_eq!(fs::read_to_string(dir.path().join("output.csv"))?, expected_catalog);

    let expected_discount =
        format!("{DISCOUNT_HEADER}\n123,WidgetA,100,10.00,500,20.00,percentage,0\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("combined_discount_output.csv"))?,
        expected_discount
    );
    Ok(())
}

#[test]
fn test_unjoinable_names_are_dropped_from_both_reports() -> Result<()> {
    let dir = tempdir()?;
    write_inputs(
        dir.path(),
        &["Ghost", "WidgetA", "PriceOnly"],
        &["123,WidgetA,simple,1,1,9.99", "5,Orphan,simple,1,1,1.00"],
        &[
            price_row("MPU", "WidgetA", ["1.00", "2.00", "3.00", "", ""], "10%", "20%"),
            price_row("MPU", "PriceOnly", ["1.00", "2.00", "3.00", "", ""], "5", "6"),
        ],
    )?;

    let config = Config::with_folder(dir.path());
    let result = Pipeline::run(&config);

    match &result.catalog_update {
        ReportOutcome::Written { rows, missing, .. } => {
            assert_eq!(*rows, 1);
            assert_eq!(*missing, 2);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    for file in ["output.csv", "combined_discount_output.csv"] {
        let content = fs::read_to_string(dir.path().join(file))?;
        assert!(!content.contains("Ghost"), "{file}");
        assert!(!content.contains("PriceOnly"), "{file}");
        assert!(!content.contains("Orphan"), "{file}");
        assert!(content.contains("WidgetA"), "{file}");
    }

    let coverage = Pipeline::check(&config);
    assert_eq!(coverage.joined, 1);
    assert_eq!(coverage.missing_direct, vec!["Ghost".to_string(), "PriceOnly".to_string()]);
    assert!(coverage.missing_price.is_empty());
    Ok(())
}

#[test]
fn test_discount_report_filters_by_core() -> Result<()> {
    let dir = tempdir()?;
    write_inputs(
        dir.path(),
        &["AudioChip", "M4Chip", "Legacy", "MpuChip"],
        &[
            "1,AudioChip,s,1,1,2.00",
            "2,M4Chip,s,1,1,3.00",
            "3,Legacy,s,1,1,4.00",
            "4,MpuChip,s,1,1,5.00",
        ],
        &[
            price_row("Audio", "AudioChip", ["1", "2", "3", "4", "5"], "1%", "2%"),
            price_row("m4", "M4Chip", ["1", "2", "3", "", ""], "3%", "4%"),
            price_row("ZZZ", "Legacy", ["1", "", "", "", ""], "5%", "6%"),
            price_row("mpu", "MpuChip", ["1", "2", "3", "", ""], "oops", ""),
        ],
    )?;

    let config = Config::with_folder(dir.path());
    Pipeline::run(&config);

    let catalog = fs::read_to_string(dir.path().join("output.csv"))?;
    let catalog_names: Vec<&str> = catalog
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(1).unwrap_or_default())
        .collect();
    assert_eq!(catalog_names, vec!["AudioChip", "M4Chip", "Legacy", "MpuChip"]);
    assert!(catalog.contains("No pricing information available"));

    let discount = fs::read_to_string(dir.path().join("combined_discount_output.csv"))?;
    assert_eq!(
        discount,
        format!(
            "{DISCOUNT_HEADER}\n\
             2,M4Chip,100,3.00,500,4.00,percentage,0\n\
             4,MpuChip,100,,500,,percentage,0\n"
        )
    );
    Ok(())
}

#[test]
fn test_rerun_produces_identical_files() -> Result<()> {
    let dir = tempdir()?;
    let names: Vec<String> = (0..50).map(|i| format!("Part{i:02}")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let direct: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{i},{n},s,1,1,{i}.50"))
        .collect();
    let direct_refs: Vec<&str> = direct.iter().map(String::as_str).collect();
    let cores = ["MPU", "M4", "8051", "Audio", "Other"];
    let prices: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, n)| price_row(cores[i % cores.len()], n, ["1", "2", "3", "4", "5"], "7.5%", "12"))
        .collect();
    write_inputs(dir.path(), &name_refs, &direct_refs, &prices)?;

    let config = Config::with_folder(dir.path());
    Pipeline::run(&config);
    let first_catalog = fs::read(dir.path().join("output.csv"))?;
    let first_discount = fs::read(dir.path().join("combined_discount_output.csv"))?;

    Pipeline::run(&config);
    assert_eq!(fs::read(dir.path().join("output.csv"))?, first_catalog);
    assert_eq!(
        fs::read(dir.path().join("combined_discount_output.csv"))?,
        first_discount
    );

    // Rows follow the update file order
    let catalog = String::from_utf8(first_catalog)?;
    let first_row = catalog.lines().nth(1).unwrap_or_default();
    assert!(first_row.starts_with("0,Part00,"));
    Ok(())
}

#[test]
fn test_missing_inputs_still_write_both_reports() -> Result<()> {
    let dir = tempdir()?;
    let config = Config::with_folder(dir.path());
    let result = Pipeline::run(&config);

    assert_eq!(result.input_failures.len(), 3);
    assert_eq!(result.update_names, 0);
    assert_eq!(
        fs::read_to_string(dir.path().join("output.csv"))?,
        format!("{CATALOG_HEADER}\n")
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("combined_discount_output.csv"))?,
        format!("{DISCOUNT_HEADER}\n")
    );
    Ok(())
}

#[test]
fn test_one_failed_report_does_not_block_the_other() -> Result<()> {
    let dir = tempdir()?;
    write_inputs(
        dir.path(),
        &["WidgetA"],
        &["123,WidgetA,simple,1,1,9.99"],
        &[price_row("MPU", "WidgetA", ["1.00", "2.00", "3.00", "", ""], "10%", "20%")],
    )?;

    let mut config = Config::with_folder(dir.path());
    config.outputs.catalog_update = "missing_dir/output.csv".to_string();
    let result = Pipeline::run(&config);

    assert!(matches!(result.catalog_update, ReportOutcome::Failed { .. }));
    assert!(result.combined_discount.is_written());
    assert!(dir.path().join("combined_discount_output.csv").exists());
    Ok(())
}
