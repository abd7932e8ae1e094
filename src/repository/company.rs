use diesel::prelude::*;

use crate::domain::company::{Company, NewCompany, UpdateCompany};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CompanyReader, CompanyWriter, DieselRepository};

impl CompanyReader for DieselRepository {
    fn get_company_by_id(&self, company_id: i32) -> RepositoryResult<Option<Company>> {
        use crate::models::company::Company as DbCompany;
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let company = companies::table
            .find(company_id)
            .first::<DbCompany>(&mut conn)
            .optional()?;

        Ok(company.map(Into::into))
    }

    fn list_companies(&self) -> RepositoryResult<Vec<Company>> {
        use crate::models::company::Company as DbCompany;
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let companies = companies::table
            .order(companies::name.asc())
            .load::<DbCompany>(&mut conn)?;

        Ok(companies.into_iter().map(Into::into).collect())
    }

    fn list_companies_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Company>> {
        use crate::models::company::Company as DbCompany;
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let companies = companies::table
            .filter(companies::id.eq_any(ids))
            .order(companies::id.asc())
            .load::<DbCompany>(&mut conn)?;

        Ok(companies.into_iter().map(Into::into).collect())
    }
}

impl CompanyWriter for DieselRepository {
    fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company> {
        use crate::models::company::{Company as DbCompany, NewCompany as DbNewCompany};
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let insertable: DbNewCompany = new_company.into();
        let created = diesel::insert_into(companies::table)
            .values(&insertable)
            .get_result::<DbCompany>(&mut conn)?;

        Ok(created.into())
    }

    fn create_companies(&self, new_companies: &[NewCompany]) -> RepositoryResult<Vec<Company>> {
        use crate::models::company::{Company as DbCompany, NewCompany as DbNewCompany};
        use crate::schema::companies;

        let mut conn = self.conn()?;

        // SQLite can't return rows from a batch insert; insert one at a
        // time inside a transaction so a failure leaves no partial batch.
        let created = conn.transaction::<Vec<DbCompany>, diesel::result::Error, _>(|conn| {
            new_companies
                .iter()
                .map(|new_company| {
                    let insertable: DbNewCompany = new_company.into();
                    diesel::insert_into(companies::table)
                        .values(&insertable)
                        .get_result::<DbCompany>(conn)
                })
                .collect()
        })?;

        Ok(created.into_iter().map(Into::into).collect())
    }

    fn update_company(
        &self,
        company_id: i32,
        updates: &UpdateCompany,
    ) -> RepositoryResult<Company> {
        use crate::models::company::{Company as DbCompany, UpdateCompany as DbUpdateCompany};
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCompany = updates.into();

        let updated = diesel::update(companies::table.find(company_id))
            .set(&db_updates)
            .get_result::<DbCompany>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_company(&self, company_id: i32) -> RepositoryResult<()> {
        use crate::schema::{companies, employees};

        let mut conn = self.conn()?;

        diesel::delete(employees::table.filter(employees::company_id.eq(company_id)))
            .execute(&mut conn)?;
        let deleted = diesel::delete(companies::table.find(company_id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
