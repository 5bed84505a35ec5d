//! End-to-end generation from a dqo.toml manifest.

use std::{fs, str::FromStr};

use dqo_codegen_php::{Generator, LanguageCodegen, Renderer};
use dqo_core::Overwrite;
use dqo_manifest::Manifest;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[generator]
namespace = "App\\Db"

[types.money]
returns = "Money"
getter = "getMoney"

[[tables]]
name = "invoice_line"

[[tables.columns]]
name = "id"
type = "integer"

[[tables.columns]]
name = "amount"
type = "money"

[[tables.columns]]
name = "currency"
type = "Currency"

[[tables.columns]]
name = "discount_code"
type = "DiscountCode"
optional = true
"#;

#[test]
fn test_generate_from_manifest() {
    let manifest = Manifest::from_str(MANIFEST).unwrap();
    let renderer = Renderer::from_manifest(&manifest);
    let tables = manifest.to_tables();
    let temp = TempDir::new().unwrap();

    let result = Generator::new(&renderer, &tables)
        .generate(temp.path(), Overwrite::Always)
        .unwrap();
    assert_eq!(result.written.len(), 2);

    let descriptor = fs::read_to_string(temp.path().join("InvoiceLineTable.php")).unwrap();
    assert!(descriptor.starts_with("<?php\n\nnamespace App\\Db;\n\nuse GW\\DQO\\Table;\n\n"));
    assert!(descriptor.contains("final class InvoiceLineTable extends Table {"));
    assert!(descriptor.contains("    public const DISCOUNT_CODE = 'discount_code';\n"));
    assert!(descriptor.contains(
        "    public function discountCode(): string {\n        return $this->fieldPath(self::DISCOUNT_CODE);\n    }\n"
    ));

    let row = fs::read_to_string(temp.path().join("InvoiceLineRow.php")).unwrap();
    assert_eq!(
        row,
        r#"<?php

namespace App\Db;

use GW\DQO\TableRow;

final class InvoiceLineRow extends TableRow {
    public function id(): int {
        return $this->getInt(InvoiceLineTable::ID);
    }
    public function amount(): Money {
        return $this->getMoney(InvoiceLineTable::AMOUNT);
    }
    public function currency(): Currency {
        return Currency::from($this->getString(InvoiceLineTable::CURRENCY));
    }
    public function discountCode(): ?DiscountCode {
        return $this->getThrough([DiscountCode::class, 'from'], InvoiceLineTable::DISCOUNT_CODE);
    }
}
"#
    );
}

#[test]
fn test_generator_language() {
    let renderer = Renderer::default();
    let generator = Generator::new(&renderer, &[]);

    assert_eq!(generator.language(), "php");
    assert_eq!(generator.file_extension(), "php");
    assert!(generator.preview().is_empty());
}
