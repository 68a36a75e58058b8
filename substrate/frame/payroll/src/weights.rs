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

//! Weights for `pallet_payroll`.
//!
//! Replace with the output of the benchmark CLI for a production runtime.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use frame_support::{
	traits::Get,
	weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for `pallet_payroll`.
pub trait WeightInfo {
	fn add_employee() -> Weight;
	fn remove_employee() -> Weight;
	fn deposit() -> Weight;
	fn pay_salary() -> Weight;
	fn withdraw() -> Weight;
	fn pay_all(n: u32) -> Weight;
	fn transfer_ownership() -> Weight;
	fn force_set_owner() -> Weight;
}

/// Weights for `pallet_payroll` using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `Payroll::Owner` (r:1 w:0)
	/// Storage: `Payroll::Salaries` (r:1 w:1)
	/// Storage: `Payroll::CounterForSalaries` (r:1 w:1)
	fn add_employee() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `145`
		//  Estimated: `3529`
		Weight::from_parts(16_420_000, 3529)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	/// Storage: `Payroll::Owner` (r:1 w:0)
	/// Storage: `Payroll::Salaries` (r:1 w:1)
	/// Storage: `Payroll::CounterForSalaries` (r:1 w:1)
	fn remove_employee() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `231`
		//  Estimated: `3529`
		Weight::from_parts(17_810_000, 3529)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	/// Storage: `System::Account` (r:2 w:2)
	/// Storage: `Payroll::Budget` (r:1 w:1)
	fn deposit() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `103`
		//  Estimated: `6196`
		Weight::from_parts(52_300_000, 6196)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
	/// Storage: `Payroll::Owner` (r:1 w:0)
	/// Storage: `Payroll::Salaries` (r:1 w:0)
	/// Storage: `Payroll::Budget` (r:1 w:1)
	/// Storage: `System::Account` (r:2 w:2)
	fn pay_salary() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `334`
		//  Estimated: `6196`
		Weight::from_parts(58_940_000, 6196)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
	/// Storage: `Payroll::Owner` (r:1 w:0)
	/// Storage: `Payroll::Budget` (r:1 w:1)
	/// Storage: `System::Account` (r:2 w:2)
	fn withdraw() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `268`
		//  Estimated: `6196`
		Weight::from_parts(55_120_000, 6196)
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
	/// Storage: `Payroll::Owner` (r:1 w:0)
	/// Storage: `Payroll::CounterForSalaries` (r:1 w:0)
	/// Storage: `Payroll::Salaries` (r:n w:0)
	/// Storage: `Payroll::Budget` (r:1 w:1)
	/// Storage: `System::Account` (r:n+1 w:n+1)
	/// The range of component `n` is `[1, 100]`.
	fn pay_all(n: u32) -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `310 + n * (123 ±0)`
		//  Estimated: `3593 + n * (2603 ±0)`
		Weight::from_parts(24_770_000, 3593)
			// Standard Error: 18_406
			.saturating_add(Weight::from_parts(41_380_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes(2_u64))
			.saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 2603).saturating_mul(n.into()))
	}
	/// Storage: `Payroll::Owner` (r:1 w:1)
	fn transfer_ownership() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `97`
		//  Estimated: `1517`
		Weight::from_parts(10_150_000, 1517)
			.saturating_add(T::DbWeight::get().reads(1_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `Payroll::Owner` (r:1 w:1)
	fn force_set_owner() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `97`
		//  Estimated: `1517`
		Weight::from_parts(9_880_000, 1517)
			.saturating_add(T::DbWeight::get().reads(1_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
}

// For backwards compatibility and tests.
impl WeightInfo for () {
	fn add_employee() -> Weight {
		Weight::from_parts(16_420_000, 3529)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	fn remove_employee() -> Weight {
		Weight::from_parts(17_810_000, 3529)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	fn deposit() -> Weight {
		Weight::from_parts(52_300_000, 6196)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
	fn pay_salary() -> Weight {
		Weight::from_parts(58_940_000, 6196)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
	fn withdraw() -> Weight {
		Weight::from_parts(55_120_000, 6196)
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
	fn pay_all(n: u32) -> Weight {
		Weight::from_parts(24_770_000, 3593)
			.saturating_add(Weight::from_parts(41_380_000, 0).saturating_mul(n.into()))
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().reads((2_u64).saturating_mul(n.into())))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
			.saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
			.saturating_add(Weight::from_parts(0, 2603).saturating_mul(n.into()))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(10_150_000, 1517)
			.saturating_add(RocksDbWeight::get().reads(1_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn force_set_owner() -> Weight {
		Weight::from_parts(9_880_000, 1517)
			.saturating_add(RocksDbWeight::get().reads(1_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
}
