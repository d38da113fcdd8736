// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payment record insert operations.

use rusqlite::params;

use opendoor_core::{NewPayment, OpendoorError};

use crate::database::{map_tr_err, Database};

/// Record a rent payment.
///
/// The method is stored in its display form ("M-Pesa" or "Bank");
/// `bank_pin` is NULL for M-Pesa payments.
pub async fn insert_payment(db: &Database, payment: &NewPayment) -> Result<(), OpendoorError> {
    let payment = payment.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO payments (id_number, method, amount, bank_pin)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    payment.id_number,
                    payment.method.to_string(),
                    payment.amount,
                    payment.bank_pin,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}
