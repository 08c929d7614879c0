//! Request and response bodies of the HTTP API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use wealthnest_core::transactions::{NewTransaction, Transaction, TransactionSide};
use wealthnest_core::users::{NewUser, User};
use wealthnest_core::utils::decimal_utils::decimal_from_f64;

#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(req: RegisterRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
            password: req.password,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

/// New ledger entry as posted by clients. Amounts arrive as JSON floats.
#[derive(Deserialize, Debug)]
pub struct TransactionCreate {
    pub symbol: String,
    #[serde(rename = "type")]
    pub side: String,
    pub units: f64,
    pub price: f64,
    pub date: NaiveDate,
}

impl TryFrom<TransactionCreate> for NewTransaction {
    type Error = wealthnest_core::Error;

    fn try_from(req: TransactionCreate) -> Result<Self, Self::Error> {
        Ok(NewTransaction {
            units: decimal_from_f64("units", req.units)?,
            price: decimal_from_f64("price", req.price)?,
            symbol: req.symbol,
            side: req.side,
            date: req.date,
        })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TransactionCreated {
    pub message: String,
    pub transaction_id: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TransactionResponse {
    pub id: i64,
    pub symbol: String,
    #[serde(rename = "type")]
    pub side: TransactionSide,
    pub units: Decimal,
    pub price: Decimal,
    pub date: NaiveDate,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        TransactionResponse {
            id: tx.id,
            symbol: tx.symbol,
            side: tx.side,
            units: tx.units,
            price: tx.price,
            date: tx.date,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PriceResponse {
    pub symbol: String,
    pub price: Decimal,
}
