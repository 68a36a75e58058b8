// This file is part of Substrate.

// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Test environment for the payroll pallet.

use crate::{self as pallet_payroll, Config};
use frame_support::{derive_impl, parameter_types, PalletId};
use frame_system::EnsureRoot;
use sp_runtime::{traits::IdentityLookup, BuildStorage};

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;
pub type Balance = u64;

pub const OWNER: AccountId = 1;
pub const FUNDER: AccountId = 2;
pub const ALICE: AccountId = 10;
pub const BOB: AccountId = 11;
pub const CHARLIE: AccountId = 12;

frame_support::construct_runtime!(
	pub enum Test {
		System: frame_system,
		Balances: pallet_balances,
		Payroll: pallet_payroll,
	}
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
	type Block = Block;
	type AccountId = AccountId;
	type Lookup = IdentityLookup<Self::AccountId>;
	type AccountData = pallet_balances::AccountData<Balance>;
}

parameter_types! {
	pub static ExistentialDeposit: Balance = 1;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
	type ExistentialDeposit = ExistentialDeposit;
	type AccountStore = System;
}

parameter_types! {
	pub const PayrollPalletId: PalletId = PalletId(*b"py/payrl");
	pub static MaxEmployees: u32 = 3;
}

impl Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Currency = Balances;
	type PalletId = PayrollPalletId;
	type MaxEmployees = MaxEmployees;
	type ForceOrigin = EnsureRoot<AccountId>;
	type WeightInfo = ();
}

pub struct ExtBuilder {
	balances: Vec<(AccountId, Balance)>,
	owner: Option<AccountId>,
	employees: Vec<(AccountId, Balance)>,
}

impl Default for ExtBuilder {
	fn default() -> Self {
		Self {
			balances: vec![(OWNER, 100), (FUNDER, 10_000)],
			owner: Some(OWNER),
			employees: vec![],
		}
	}
}

impl ExtBuilder {
	pub fn owner(mut self, owner: Option<AccountId>) -> Self {
		self.owner = owner;
		self
	}

	pub fn employees(mut self, employees: Vec<(AccountId, Balance)>) -> Self {
		self.employees = employees;
		self
	}

	pub fn build(self) -> sp_io::TestExternalities {
		let mut storage = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
		pallet_balances::GenesisConfig::<Test> { balances: self.balances, ..Default::default() }
			.assimilate_storage(&mut storage)
			.unwrap();
		pallet_payroll::GenesisConfig::<Test> { owner: self.owner, employees: self.employees }
			.assimilate_storage(&mut storage)
			.unwrap();

		let mut ext = sp_io::TestExternalities::from(storage);
		ext.execute_with(|| {
			// for events to be deposited.
			System::set_block_number(1);
		});
		ext
	}

	pub fn build_and_execute(self, test: impl FnOnce()) {
		sp_tracing::try_init_simple();
		let mut ext = self.build();
		ext.execute_with(test);
		ext.execute_with(|| {
			Payroll::do_try_state().unwrap();
		});
	}
}

#[cfg(feature = "runtime-benchmarks")]
pub fn new_bench_ext() -> sp_io::TestExternalities {
	ExtBuilder::default().build()
}

/// Deposit `amount` into the payroll budget on behalf of [`FUNDER`].
pub fn fund_budget(amount: Balance) {
	frame_support::assert_ok!(Payroll::deposit(RuntimeOrigin::signed(FUNDER), amount));
}

pub fn payroll_events() -> Vec<crate::Event<Test>> {
	System::events()
		.into_iter()
		.map(|r| r.event)
		.filter_map(|e| if let RuntimeEvent::Payroll(inner) = e { Some(inner) } else { None })
		.collect()
}
