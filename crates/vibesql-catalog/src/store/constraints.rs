//! Key constraint registration.
//!
//! Column names are validated against the table and stored with their
//! declared spelling, so later comparisons can be exact.

use crate::{
    constraint::{PrimaryKey, UniqueConstraint},
    errors::CatalogError,
    foreign_key::ForeignKeyConstraint,
    table::TableSchema,
};

fn canonical_columns(table: &TableSchema, columns: &[String], case_sensitive: bool) -> Result<Vec<String>, CatalogError> {
    columns
        .iter()
        .map(|name| {
            table.find_column(name, case_sensitive).map(|column| column.name.clone()).ok_or_else(|| {
                CatalogError::ColumnNotFound { column_name: name.clone(), table_name: table.name.clone() }
            })
        })
        .collect()
}

fn constraint_name_taken(table: &TableSchema, name: &str) -> bool {
    table.primary_key.as_ref().is_some_and(|pk| pk.name == name)
        || table.unique_constraints.iter().any(|uc| uc.name == name)
        || table.foreign_keys.iter().any(|fk| fk.name == name)
}

impl super::Catalog {
    /// Set the primary key of a table. Key columns become NOT NULL.
    pub fn set_primary_key(
        &mut self,
        schema_name: &str,
        table_name: &str,
        primary_key: PrimaryKey,
    ) -> Result<(), CatalogError> {
        let case_sensitive = self.case_sensitive_identifiers;
        let table = self.get_table_mut(schema_name, table_name)?;
        if table.primary_key.is_some() {
            return Err(CatalogError::ConstraintAlreadyExists(primary_key.name));
        }
        if constraint_name_taken(table, &primary_key.name) {
            return Err(CatalogError::ConstraintAlreadyExists(primary_key.name));
        }
        let columns = canonical_columns(table, &primary_key.columns, case_sensitive)?;
        table.set_primary_key(PrimaryKey { name: primary_key.name, columns });
        Ok(())
    }

    /// Add a UNIQUE constraint to a table.
    pub fn add_unique_constraint(
        &mut self,
        schema_name: &str,
        table_name: &str,
        constraint: UniqueConstraint,
    ) -> Result<(), CatalogError> {
        let case_sensitive = self.case_sensitive_identifiers;
        let table = self.get_table_mut(schema_name, table_name)?;
        if constraint_name_taken(table, &constraint.name) {
            return Err(CatalogError::ConstraintAlreadyExists(constraint.name));
        }
        let columns = canonical_columns(table, &constraint.columns, case_sensitive)?;
        table.unique_constraints.push(UniqueConstraint { name: constraint.name, columns });
        Ok(())
    }

    /// Add a foreign key to the child table `schema_name.table_name`.
    ///
    /// The referenced table must exist, the column lists must pair up and the
    /// parent columns must be covered by its primary key or a UNIQUE constraint.
    /// A missing parent schema defaults to the child's schema.
    pub fn add_foreign_key(
        &mut self,
        schema_name: &str,
        table_name: &str,
        foreign_key: ForeignKeyConstraint,
    ) -> Result<(), CatalogError> {
        if foreign_key.column_names.len() != foreign_key.parent_column_names.len() {
            return Err(CatalogError::ForeignKeyColumnMismatch {
                constraint_name: foreign_key.name,
                columns: foreign_key.column_names.len(),
                parent_columns: foreign_key.parent_column_names.len(),
            });
        }
        let case_sensitive = self.case_sensitive_identifiers;

        let parent_schema_name = foreign_key.parent_schema.as_deref().unwrap_or(schema_name);
        let parent_schema = self
            .get_schema(parent_schema_name)
            .ok_or_else(|| CatalogError::SchemaNotFound(parent_schema_name.to_string()))?;
        let parent = parent_schema.get_table(&foreign_key.parent_table, case_sensitive).ok_or_else(|| {
            CatalogError::TableNotFound { table_name: foreign_key.parent_table.clone() }
        })?;
        let parent_columns = canonical_columns(parent, &foreign_key.parent_column_names, case_sensitive)?;
        let referenced_constraint = parent.key_constraint_for(&parent_columns).map(str::to_string).ok_or_else(|| {
            CatalogError::ReferencedKeyNotFound {
                constraint_name: foreign_key.name.clone(),
                table_name: parent.name.clone(),
            }
        })?;
        let parent_schema = parent_schema.name.clone();
        let parent_table = parent.name.clone();

        let table = self.get_table_mut(schema_name, table_name)?;
        if constraint_name_taken(table, &foreign_key.name) {
            return Err(CatalogError::ConstraintAlreadyExists(foreign_key.name));
        }
        let columns = canonical_columns(table, &foreign_key.column_names, case_sensitive)?;
        table.foreign_keys.push(ForeignKeyConstraint {
            column_names: columns,
            parent_schema: Some(parent_schema),
            parent_table,
            parent_column_names: parent_columns,
            referenced_constraint: Some(referenced_constraint),
            ..foreign_key
        });
        Ok(())
    }

    /// Drop a PRIMARY KEY, UNIQUE or FOREIGN KEY constraint by name.
    pub fn drop_constraint(
        &mut self,
        schema_name: &str,
        table_name: &str,
        constraint_name: &str,
    ) -> Result<(), CatalogError> {
        let table = self.get_table_mut(schema_name, table_name)?;
        if table.primary_key.as_ref().is_some_and(|pk| pk.name == constraint_name) {
            table.primary_key = None;
            return Ok(());
        }
        let unique_before = table.unique_constraints.len();
        table.unique_constraints.retain(|uc| uc.name != constraint_name);
        let fk_before = table.foreign_keys.len();
        table.foreign_keys.retain(|fk| fk.name != constraint_name);
        if table.unique_constraints.len() == unique_before && table.foreign_keys.len() == fk_before {
            return Err(CatalogError::ConstraintNotFound(constraint_name.to_string()));
        }
        Ok(())
    }
}
