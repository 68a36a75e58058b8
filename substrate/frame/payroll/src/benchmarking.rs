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

//! Benchmarks for Payroll Pallet

use super::*;
use crate::Pallet as Payroll;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;

fn assert_last_event<T: Config>(generic_event: crate::Event<T>) {
	let re: <T as Config>::RuntimeEvent = generic_event.into();
	frame_system::Pallet::<T>::assert_last_event(re.into());
}

fn salary<T: Config>() -> BalanceOf<T> {
	T::Currency::minimum_balance().saturating_mul(100u32.into())
}

fn set_owner<T: Config>() -> T::AccountId {
	let owner: T::AccountId = whitelisted_caller();
	Owner::<T>::put(&owner);
	owner
}

/// Back the budget with `amount`, leaving the payroll account an existential deposit on top.
fn fund_budget<T: Config>(amount: BalanceOf<T>) {
	let account = Payroll::<T>::payroll_account();
	T::Currency::set_balance(&account, amount.saturating_add(T::Currency::minimum_balance()));
	Budget::<T>::put(amount);
}

#[benchmarks]
mod benchmarks {
	use super::*;

	#[benchmark]
	fn add_employee() {
		let owner = set_owner::<T>();
		let employee: T::AccountId = account("employee", 0, SEED);
		let employee_lookup = T::Lookup::unlookup(employee.clone());
		let salary = salary::<T>();

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), employee_lookup, salary);

		assert_last_event::<T>(Event::EmployeeAdded { employee, salary });
	}

	#[benchmark]
	fn remove_employee() {
		let owner = set_owner::<T>();
		let employee: T::AccountId = account("employee", 0, SEED);
		Salaries::<T>::insert(&employee, salary::<T>());
		let employee_lookup = T::Lookup::unlookup(employee.clone());

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), employee_lookup);

		assert_last_event::<T>(Event::EmployeeRemoved { employee });
	}

	#[benchmark]
	fn deposit() {
		let caller: T::AccountId = whitelisted_caller();
		let amount = salary::<T>();
		T::Currency::set_balance(&caller, amount.saturating_mul(2u32.into()));

		#[extrinsic_call]
		_(RawOrigin::Signed(caller.clone()), amount);

		assert_eq!(Budget::<T>::get(), amount);
		assert_last_event::<T>(Event::Deposited { from: caller, amount });
	}

	#[benchmark]
	fn pay_salary() {
		let owner = set_owner::<T>();
		let employee: T::AccountId = account("employee", 0, SEED);
		let salary = salary::<T>();
		Salaries::<T>::insert(&employee, salary);
		fund_budget::<T>(salary);
		let employee_lookup = T::Lookup::unlookup(employee.clone());

		#[extrinsic_call]
		_(RawOrigin::Signed(owner), employee_lookup);

		assert!(Budget::<T>::get().is_zero());
		assert_last_event::<T>(Event::SalaryPaid { employee, amount: salary });
	}

	#[benchmark]
	fn withdraw() {
		let owner = set_owner::<T>();
		let amount = salary::<T>();
		fund_budget::<T>(amount);

		#[extrinsic_call]
		_(RawOrigin::Signed(owner.clone()), amount);

		assert_last_event::<T>(Event::Withdrawn { to: owner, amount });
	}

	#[benchmark]
	fn pay_all(n: Linear<1, { T::MaxEmployees::get() }>) {
		let owner = set_owner::<T>();
		let salary = salary::<T>();
		for i in 0..n {
			let employee: T::AccountId = account("employee", i, SEED);
			Salaries::<T>::insert(&employee, salary);
		}
		let total = salary.saturating_mul(n.into());
		fund_budget::<T>(total);

		#[extrinsic_call]
		_(RawOrigin::Signed(owner));

		assert!(Budget::<T>::get().is_zero());
		assert_last_event::<T>(Event::PayrollExecuted { employees: n, total });
	}

	#[benchmark]
	fn transfer_ownership() {
		let owner = set_owner::<T>();
		let new_owner: T::AccountId = account("owner", 0, SEED);
		let new_owner_lookup = T::Lookup::unlookup(new_owner.clone());

		#[extrinsic_call]
		_(RawOrigin::Signed(owner.clone()), new_owner_lookup);

		assert_last_event::<T>(Event::OwnerChanged { old: Some(owner), new: new_owner });
	}

	#[benchmark]
	fn force_set_owner() -> Result<(), BenchmarkError> {
		let old = set_owner::<T>();
		let origin =
			T::ForceOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
		let new_owner: T::AccountId = account("owner", 0, SEED);
		let new_owner_lookup = T::Lookup::unlookup(new_owner.clone());

		#[extrinsic_call]
		_(origin as T::RuntimeOrigin, new_owner_lookup);

		assert_last_event::<T>(Event::OwnerChanged { old: Some(old), new: new_owner });
		Ok(())
	}

	impl_benchmark_test_suite!(Payroll, crate::mock::new_bench_ext(), crate::mock::Test);
}
