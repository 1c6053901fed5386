//! Repository for the `employees` table and its technology links.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use super::technology_links::TechnologyLinks;
use crate::models::employee::{
    CreateEmployee, Employee, EmployeeLogin, EmployeeResponse, UpdateEmployee,
};

const COLUMNS: &str = "id, name, employee_code, email, phone_no, password_hash, \
    role_id, designation_id, department_id, reporting_to, joining_date, relieving_date, \
    projection, profile, is_active, created_by, created_at, updated_by, updated_at";

const LINKS: TechnologyLinks = TechnologyLinks {
    table: "employee_technologies",
    owner_column: "employee_id",
};

/// Read-view select: role, designation, department and manager names.
fn view_select() -> String {
    format!(
        "SELECT e.id, e.name, e.employee_code, e.email, e.phone_no, \
            r.name AS role, dg.name AS designation, dp.name AS department, \
            m.name AS reporting_to, e.joining_date, e.relieving_date, \
            e.projection, e.profile, {techs} AS technologies, \
            e.is_active, e.created_by, e.created_at, e.updated_by, e.updated_at \
         FROM employees e \
         JOIN roles r ON r.id = e.role_id \
         LEFT JOIN designations dg ON dg.id = e.designation_id \
         LEFT JOIN departments dp ON dp.id = e.department_id \
         LEFT JOIN employees m ON m.id = e.reporting_to",
        techs = LINKS.names_expr("e.id"),
    )
}

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee and its technology links in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEmployee,
        actor: &str,
    ) -> Result<Employee, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO employees
                (name, employee_code, email, phone_no, password_hash, role_id,
                 designation_id, department_id, reporting_to, joining_date,
                 relieving_date, projection, profile, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        let employee = sqlx::query_as::<_, Employee>(&query)
            .bind(&input.name)
            .bind(&input.employee_code)
            .bind(&input.email)
            .bind(&input.phone_no)
            .bind(&input.password_hash)
            .bind(input.role_id)
            .bind(input.designation_id)
            .bind(input.department_id)
            .bind(input.reporting_to)
            .bind(input.joining_date)
            .bind(input.relieving_date)
            .bind(&input.projection)
            .bind(&input.profile)
            .bind(actor)
            .fetch_one(&mut *tx)
            .await?;

        if !input.technology_ids.is_empty() {
            LINKS
                .replace(&mut *tx, employee.id, &input.technology_ids)
                .await?;
        }

        tx.commit().await?;
        Ok(employee)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an employee by display name (unique).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE name = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE email = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_employee_code(
        pool: &PgPool,
        employee_code: &str,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE employee_code = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(employee_code)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_phone_no(
        pool: &PgPool,
        phone_no: &str,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE phone_no = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(phone_no)
            .fetch_optional(pool)
            .await
    }

    /// Credential lookup for login: hash, active flag and role name.
    pub async fn find_login_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<EmployeeLogin>, sqlx::Error> {
        sqlx::query_as::<_, EmployeeLogin>(
            "SELECT e.id, e.name, e.email, e.password_hash, e.is_active, r.name AS role
             FROM employees e
             JOIN roles r ON r.id = e.role_id
             WHERE e.email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EmployeeResponse>, sqlx::Error> {
        let query = format!("{} WHERE e.id = $1", view_select());
        sqlx::query_as::<_, EmployeeResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List employees by name, optionally including inactive ones.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<EmployeeResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!("{} ORDER BY e.name", view_select())
        } else {
            format!("{} WHERE e.is_active = true ORDER BY e.name", view_select())
        };
        sqlx::query_as::<_, EmployeeResponse>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an employee. Only non-`None` fields are applied.
    ///
    /// If `technology_ids` is `Some`, replaces all technology links in the
    /// same transaction. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
        actor: &str,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE employees SET
                name = COALESCE($2, name),
                employee_code = COALESCE($3, employee_code),
                email = COALESCE($4, email),
                phone_no = COALESCE($5, phone_no),
                password_hash = COALESCE($6, password_hash),
                role_id = COALESCE($7, role_id),
                designation_id = COALESCE($8, designation_id),
                department_id = COALESCE($9, department_id),
                reporting_to = COALESCE($10, reporting_to),
                joining_date = COALESCE($11, joining_date),
                relieving_date = COALESCE($12, relieving_date),
                projection = COALESCE($13, projection),
                profile = COALESCE($14, profile),
                is_active = COALESCE($15, is_active),
                updated_by = $16,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let employee = sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.employee_code)
            .bind(&input.email)
            .bind(&input.phone_no)
            .bind(&input.password_hash)
            .bind(input.role_id)
            .bind(input.designation_id)
            .bind(input.department_id)
            .bind(input.reporting_to)
            .bind(input.joining_date)
            .bind(input.relieving_date)
            .bind(&input.projection)
            .bind(&input.profile)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(&mut *tx)
            .await?;

        if let (Some(employee), Some(technology_ids)) = (&employee, &input.technology_ids) {
            LINKS.replace(&mut *tx, employee.id, technology_ids).await?;
        }

        tx.commit().await?;
        Ok(employee)
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE employees SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
