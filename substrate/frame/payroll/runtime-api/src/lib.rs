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

//! Runtime API definition for the payroll pallet.
//!
//! Lets RPC clients read the payroll state without decoding raw storage.

#![cfg_attr(not(feature = "std"), no_std)]

use codec::Codec;

sp_api::decl_runtime_apis! {
	/// Read access to the payroll pallet.
	pub trait PayrollApi<AccountId, Balance>
	where
		AccountId: Codec,
		Balance: Codec,
	{
		/// Salary registered for `employee`, if any.
		fn salary_of(employee: AccountId) -> Option<Balance>;

		/// Funds deposited and not yet paid out or withdrawn.
		fn budget() -> Balance;

		/// The current payroll owner.
		fn owner() -> Option<AccountId>;

		/// Number of registered employees.
		fn employee_count() -> u32;
	}
}
