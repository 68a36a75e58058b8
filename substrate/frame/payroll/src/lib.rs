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

//! # Payroll Pallet
//!
//! A pallet that pays fixed salaries to a set of employees out of a budget held by the pallet.
//!
//! ## Pallet API
//!
//! See the [`pallet`] module for more information about the interfaces this pallet exposes,
//! including its configuration trait, dispatchables, storage items, events and errors.
//!
//! ## Overview
//!
//! A single _owner_ account administers the payroll. The owner registers employees together with
//! the salary each of them is owed per payout, and triggers payouts either for one employee with
//! [`pay_salary`](Pallet::pay_salary) or for everybody at once with [`pay_all`](Pallet::pay_all).
//!
//! Anybody can top up the budget with [`deposit`](Pallet::deposit). Deposited funds are moved to
//! a keyless account derived from [`Config::PalletId`] and tracked in [`Budget`]. Only the tracked
//! budget is ever spent; funds sent straight to the payroll account are left alone. The owner can
//! take unspent funds back with [`withdraw`](Pallet::withdraw). Payouts may reap the payroll
//! account; whatever is burned as dust then leaves the budget as well.
//!
//! Ownership is set at genesis. It can be handed over by the owner with
//! [`transfer_ownership`](Pallet::transfer_ownership), or replaced by [`Config::ForceOrigin`]
//! with [`force_set_owner`](Pallet::force_set_owner).
//!
//! ### Example
//!
//! Register an employee, fund the payroll and pay the salary out.
#![doc = docify::embed!("src/tests.rs", pay_single_employee)]
//!
//! ## Low Level / Implementation Details
//!
//! Employees live in a counted map so that [`Config::MaxEmployees`] can be enforced without
//! iterating storage. [`pay_all`](Pallet::pay_all) is charged for `MaxEmployees` payouts up
//! front and refunds the difference once the real number of employees is known.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use frame_support::{
	pallet_prelude::*,
	traits::{
		fungible::{Inspect, Mutate},
		tokens::Preservation,
	},
	PalletId,
};
use frame_system::pallet_prelude::*;
use sp_runtime::{
	traits::{AccountIdConversion, CheckedAdd, MaybeSerializeDeserialize, StaticLookup, Zero},
	Saturating,
};

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
pub mod weights;
pub use weights::WeightInfo;

pub use pallet::*;

const LOG_TARGET: &str = "runtime::payroll";

type AccountIdLookupOf<T> = <<T as frame_system::Config>::Lookup as StaticLookup>::Source;

/// Balance type of the currency salaries are paid in.
pub type BalanceOf<T> =
	<<T as Config>::Currency as Inspect<<T as frame_system::Config>::AccountId>>::Balance;

#[frame_support::pallet]
pub mod pallet {
	use super::*;

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// The overarching event type.
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// The currency salaries are paid in.
		type Currency: Mutate<Self::AccountId, Balance: MaybeSerializeDeserialize>;

		/// Identifier from which the account holding the payroll funds is derived.
		#[pallet::constant]
		type PalletId: Get<PalletId>;

		/// Maximum number of employees registered at the same time.
		#[pallet::constant]
		type MaxEmployees: Get<u32>;

		/// Origin allowed to replace the payroll owner.
		type ForceOrigin: EnsureOrigin<Self::RuntimeOrigin>;

		/// Weight information for extrinsics in this pallet.
		type WeightInfo: WeightInfo;
	}

	/// The account administering the payroll.
	#[pallet::storage]
	pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

	/// Salary owed to each employee per payout. Never zero.
	#[pallet::storage]
	pub type Salaries<T: Config> =
		CountedStorageMap<_, Blake2_128Concat, T::AccountId, BalanceOf<T>, OptionQuery>;

	/// Funds deposited into the payroll account that have not been paid out or withdrawn.
	///
	/// Never more than the payroll account balance.
	#[pallet::storage]
	pub type Budget<T: Config> = StorageValue<_, BalanceOf<T>, ValueQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// A new employee was registered.
		EmployeeAdded { employee: T::AccountId, salary: BalanceOf<T> },
		/// The salary of an already registered employee changed.
		SalaryUpdated { employee: T::AccountId, old: BalanceOf<T>, new: BalanceOf<T> },
		/// An employee was removed from the payroll.
		EmployeeRemoved { employee: T::AccountId },
		/// Funds were added to the budget.
		Deposited { from: T::AccountId, amount: BalanceOf<T> },
		/// A salary was paid out.
		SalaryPaid { employee: T::AccountId, amount: BalanceOf<T> },
		/// Every registered employee was paid.
		PayrollExecuted { employees: u32, total: BalanceOf<T> },
		/// The owner took funds out of the budget.
		Withdrawn { to: T::AccountId, amount: BalanceOf<T> },
		/// The payroll owner changed.
		OwnerChanged { old: Option<T::AccountId>, new: T::AccountId },
	}

	#[pallet::error]
	pub enum Error<T> {
		/// Sender is not the payroll owner.
		NotOwner,
		/// A salary must be greater than zero.
		InvalidSalary,
		/// The account is not a registered employee.
		EmployeeNotFound,
		/// `MaxEmployees` employees are already registered.
		TooManyEmployees,
		/// The budget does not cover the requested payout.
		InsufficientBudget,
		/// The amount must be greater than zero.
		ZeroAmount,
		/// There is nobody to pay.
		NoEmployees,
		/// The sum of all salaries does not fit in a balance.
		Overflow,
	}

	#[pallet::genesis_config]
	#[derive(frame_support::DefaultNoBound)]
	pub struct GenesisConfig<T: Config> {
		/// The initial payroll owner.
		pub owner: Option<T::AccountId>,
		/// Employees registered at genesis, with their salaries.
		pub employees: Vec<(T::AccountId, BalanceOf<T>)>,
	}

	#[pallet::genesis_build]
	impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
		fn build(&self) {
			if let Some(ref owner) = self.owner {
				Owner::<T>::put(owner);
			}

			assert!(
				self.employees.len() as u32 <= T::MaxEmployees::get(),
				"more genesis employees than MaxEmployees"
			);
			for (employee, salary) in &self.employees {
				assert!(!salary.is_zero(), "genesis salary must be greater than zero");
				assert!(!Salaries::<T>::contains_key(employee), "duplicate genesis employee");
				Salaries::<T>::insert(employee, salary);
			}
		}
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
		fn integrity_test() {
			assert!(T::MaxEmployees::get() > 0, "MaxEmployees must be greater than zero");
		}

		#[cfg(feature = "try-runtime")]
		fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
			Self::do_try_state()
		}
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Register `employee` with `salary`, or change the salary of a registered employee.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner.
		///
		/// Emits [`Event::EmployeeAdded`] for a new employee and [`Event::SalaryUpdated`]
		/// otherwise.
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::add_employee())]
		pub fn add_employee(
			origin: OriginFor<T>,
			employee: AccountIdLookupOf<T>,
			#[pallet::compact] salary: BalanceOf<T>,
		) -> DispatchResult {
			Self::ensure_owner(origin)?;
			let employee = T::Lookup::lookup(employee)?;
			ensure!(!salary.is_zero(), Error::<T>::InvalidSalary);

			match Salaries::<T>::get(&employee) {
				Some(old) => {
					Salaries::<T>::insert(&employee, salary);
					Self::deposit_event(Event::SalaryUpdated { employee, old, new: salary });
				},
				None => {
					ensure!(
						Salaries::<T>::count() < T::MaxEmployees::get(),
						Error::<T>::TooManyEmployees
					);
					Salaries::<T>::insert(&employee, salary);
					Self::deposit_event(Event::EmployeeAdded { employee, salary });
				},
			}
			Ok(())
		}

		/// Remove `employee` from the payroll.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner.
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::remove_employee())]
		pub fn remove_employee(
			origin: OriginFor<T>,
			employee: AccountIdLookupOf<T>,
		) -> DispatchResult {
			Self::ensure_owner(origin)?;
			let employee = T::Lookup::lookup(employee)?;

			Salaries::<T>::take(&employee).ok_or(Error::<T>::EmployeeNotFound)?;
			Self::deposit_event(Event::EmployeeRemoved { employee });
			Ok(())
		}

		/// Move `amount` from the caller into the payroll account and add it to the budget.
		///
		/// The dispatch origin for this call must be _Signed_. The caller is kept alive.
		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::deposit())]
		pub fn deposit(
			origin: OriginFor<T>,
			#[pallet::compact] amount: BalanceOf<T>,
		) -> DispatchResult {
			let from = ensure_signed(origin)?;
			ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

			T::Currency::transfer(&from, &Self::payroll_account(), amount, Preservation::Preserve)?;
			Budget::<T>::mutate(|budget| *budget = budget.saturating_add(amount));

			Self::deposit_event(Event::Deposited { from, amount });
			Ok(())
		}

		/// Pay `employee` their salary out of the budget.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner.
		#[pallet::call_index(3)]
		#[pallet::weight(T::WeightInfo::pay_salary())]
		pub fn pay_salary(origin: OriginFor<T>, employee: AccountIdLookupOf<T>) -> DispatchResult {
			Self::ensure_owner(origin)?;
			let employee = T::Lookup::lookup(employee)?;

			let salary = Salaries::<T>::get(&employee).ok_or(Error::<T>::EmployeeNotFound)?;
			let budget = Budget::<T>::get();
			ensure!(budget >= salary, Error::<T>::InsufficientBudget);

			Self::pay(&employee, salary)?;
			Self::spend_budget(salary);
			Ok(())
		}

		/// Take `amount` out of the budget and send it to the owner.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner.
		#[pallet::call_index(4)]
		#[pallet::weight(T::WeightInfo::withdraw())]
		pub fn withdraw(
			origin: OriginFor<T>,
			#[pallet::compact] amount: BalanceOf<T>,
		) -> DispatchResult {
			let owner = Self::ensure_owner(origin)?;
			ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
			let budget = Budget::<T>::get();
			ensure!(amount <= budget, Error::<T>::InsufficientBudget);

			T::Currency::transfer(
				&Self::payroll_account(),
				&owner,
				amount,
				Preservation::Expendable,
			)?;
			Self::spend_budget(amount);

			Self::deposit_event(Event::Withdrawn { to: owner, amount });
			Ok(())
		}

		/// Pay every registered employee their salary.
		///
		/// Either everybody is paid or nobody is: the call fails without paying anyone if the
		/// budget does not cover the sum of all salaries.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner.
		///
		/// ## Complexity
		/// - O(E) where E is the number of employees.
		#[pallet::call_index(5)]
		#[pallet::weight(T::WeightInfo::pay_all(T::MaxEmployees::get()))]
		pub fn pay_all(origin: OriginFor<T>) -> DispatchResultWithPostInfo {
			Self::ensure_owner(origin)?;

			let payees: Vec<(T::AccountId, BalanceOf<T>)> = Salaries::<T>::iter().collect();
			ensure!(!payees.is_empty(), Error::<T>::NoEmployees);

			let total = payees
				.iter()
				.try_fold(BalanceOf::<T>::zero(), |acc, (_, salary)| acc.checked_add(salary))
				.ok_or(Error::<T>::Overflow)?;
			let budget = Budget::<T>::get();
			ensure!(total <= budget, Error::<T>::InsufficientBudget);

			for (employee, salary) in &payees {
				Self::pay(employee, *salary)?;
			}
			Self::spend_budget(total);

			let employees = payees.len() as u32;
			log::debug!(
				target: LOG_TARGET,
				"paid {employees} employees a total of {total:?}, {:?} left in budget",
				Budget::<T>::get(),
			);
			Self::deposit_event(Event::PayrollExecuted { employees, total });

			Ok(Some(T::WeightInfo::pay_all(employees)).into())
		}

		/// Hand the payroll over to `new_owner`.
		///
		/// The dispatch origin for this call must be _Signed_ by the owner.
		#[pallet::call_index(6)]
		#[pallet::weight(T::WeightInfo::transfer_ownership())]
		pub fn transfer_ownership(
			origin: OriginFor<T>,
			new_owner: AccountIdLookupOf<T>,
		) -> DispatchResult {
			Self::ensure_owner(origin)?;
			let new_owner = T::Lookup::lookup(new_owner)?;

			Self::set_owner(new_owner);
			Ok(())
		}

		/// Set the payroll owner regardless of who currently holds it.
		///
		/// The dispatch origin for this call must be [`Config::ForceOrigin`].
		#[pallet::call_index(7)]
		#[pallet::weight(T::WeightInfo::force_set_owner())]
		pub fn force_set_owner(
			origin: OriginFor<T>,
			new_owner: AccountIdLookupOf<T>,
		) -> DispatchResult {
			T::ForceOrigin::ensure_origin(origin)?;
			let new_owner = T::Lookup::lookup(new_owner)?;

			Self::set_owner(new_owner);
			Ok(())
		}
	}
}

impl<T: Config> Pallet<T> {
	/// The account holding the payroll funds.
	pub fn payroll_account() -> T::AccountId {
		T::PalletId::get().into_account_truncating()
	}

	/// Salary registered for `employee`, if any.
	pub fn salary_of(employee: &T::AccountId) -> Option<BalanceOf<T>> {
		Salaries::<T>::get(employee)
	}

	/// Funds available for payouts.
	pub fn budget() -> BalanceOf<T> {
		Budget::<T>::get()
	}

	/// The current payroll owner.
	pub fn owner() -> Option<T::AccountId> {
		Owner::<T>::get()
	}

	/// Number of registered employees.
	pub fn employee_count() -> u32 {
		Salaries::<T>::count()
	}

	fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
		let who = ensure_signed(origin)?;
		ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::NotOwner);
		Ok(who)
	}

	fn set_owner(new: T::AccountId) {
		let old = Owner::<T>::get();
		Owner::<T>::put(&new);

		log::info!(target: LOG_TARGET, "payroll owner changed from {old:?} to {new:?}");
		Self::deposit_event(Event::OwnerChanged { old, new });
	}

	/// Transfer `amount` from the payroll account to `employee`. The budget is left untouched.
	fn pay(employee: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
		let account = Self::payroll_account();
		T::Currency::transfer(&account, employee, amount, Preservation::Expendable)?;
		Self::deposit_event(Event::SalaryPaid { employee: employee.clone(), amount });
		Ok(())
	}

	/// Take `spent` out of the budget.
	///
	/// Paying out the last funds above the existential deposit reaps the payroll account and
	/// burns what is left as dust, so the budget is capped at the remaining account balance.
	fn spend_budget(spent: BalanceOf<T>) {
		let held = T::Currency::balance(&Self::payroll_account());
		Budget::<T>::mutate(|budget| {
			let left = budget.saturating_sub(spent);
			if left > held {
				log::debug!(
					target: LOG_TARGET,
					"payroll account reaped, {:?} of the budget burned as dust",
					left.saturating_sub(held),
				);
			}
			*budget = left.min(held);
		});
	}

	/// Ensure the correctness of the pallet storage.
	///
	/// * every salary is greater than zero.
	/// * no more than `MaxEmployees` employees are registered.
	/// * the tracked budget is backed by the payroll account.
	#[cfg(any(feature = "try-runtime", test))]
	pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
		let mut employees = 0u32;
		for (_, salary) in Salaries::<T>::iter() {
			ensure!(!salary.is_zero(), "zero salary in storage");
			employees.saturating_inc();
		}
		ensure!(employees == Salaries::<T>::count(), "employee counter out of sync");
		ensure!(employees <= T::MaxEmployees::get(), "more employees than MaxEmployees");
		ensure!(
			Budget::<T>::get() <= T::Currency::balance(&Self::payroll_account()),
			"budget exceeds the payroll account balance"
		);
		Ok(())
	}
}
