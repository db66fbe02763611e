use crate::data::reward::{RewardLedgerRepository, HOUSE_ACCOUNT_ID};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod claim_daily;
mod ensure_house_account;
mod get_top;
mod increment;
