#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated weight constants for MVP (will be replaced by benchmarks post-grant)
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::Hash;
use sp_std::prelude::*;

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    /// The register pallet this controller owns and drives.
    type Ledger<T> = pallet_share_register::Pallet<T>;

    #[pallet::config]
    pub trait Config: frame_system::Config + pallet_share_register::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// The controller's owner. Starts as the deployer; handed over at most
    /// once, during `finish_migration`.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Whether the owned register has been created.
    #[pallet::storage]
    #[pallet::getter(fn is_deployed)]
    pub type Deployed<T> = StorageValue<_, bool, ValueQuery>;

    /// Whether bulk onboarding has completed and ownership was handed to the
    /// permanent administrator.
    #[pallet::storage]
    #[pallet::getter(fn is_migrated)]
    pub type Migrated<T> = StorageValue<_, bool, ValueQuery>;

    /// Terminal shutdown flag. Monotonic: once true the controller is inert.
    #[pallet::storage]
    #[pallet::getter(fn is_closed)]
    pub type Closed<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// The owned register was created
        LedgerDeployed { name: Vec<u8>, symbol: Vec<u8> },
        /// Bulk onboarding finished; the register is ready for operation
        Ready { owner: T::AccountId },
        /// The controller shut down and cascaded a hard freeze into the register
        ControllerClosed,
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the controller's owner
        NotOwner,
        /// The register has already been created
        AlreadyDeployed,
        /// The register has not been created yet
        NotDeployed,
        /// Bulk onboarding has already been completed
        AlreadyMigrated,
        /// The controller has shut down
        ControllerClosed,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create the owned register with its immutable name/symbol pair.
        /// One-time; a second invocation is a hard failure.
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn create_ledger(
            origin: OriginFor<T>,
            name: Vec<u8>,
            symbol: Vec<u8>,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(!Closed::<T>::get(), Error::<T>::ControllerClosed);
            ensure!(!Deployed::<T>::get(), Error::<T>::AlreadyDeployed);
            Ledger::<T>::do_create(name.clone(), symbol.clone())?;
            Deployed::<T>::put(true);
            Self::deposit_event(Event::LedgerDeployed { name, symbol });
            Ok(())
        }

        /// Verify an account, deriving its fingerprint from the raw identity
        /// info bytes.
        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
            info: Vec<u8>,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_active()?;
            Ledger::<T>::do_add_verified(account, Self::fingerprint(&info))
        }

        /// Remove an account's verification.
        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn remove_whitelist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_active()?;
            Ledger::<T>::do_remove_verified(account)
        }

        /// Re-derive and replace an account's fingerprint after its identity
        /// record changed off-chain.
        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn update_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
            info: Vec<u8>,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_active()?;
            Ledger::<T>::do_update_verified(account, Self::fingerprint(&info))
        }

        /// Issue units to a verified account.
        #[pallet::call_index(4)]
        #[pallet::weight(10_000)]
        pub fn issue(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_active()?;
            Ledger::<T>::do_issue(to, amount)
        }

        /// Burn units from an account.
        #[pallet::call_index(5)]
        #[pallet::weight(10_000)]
        pub fn burn(origin: OriginFor<T>, from: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_active()?;
            Ledger::<T>::do_burn(from, amount)
        }

        /// Flip the register's global freeze flag.
        #[pallet::call_index(6)]
        #[pallet::weight(10_000)]
        pub fn freeze(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_active()?;
            Ledger::<T>::do_toggle_freeze()
        }

        /// Flip an account's lock flag.
        #[pallet::call_index(7)]
        #[pallet::weight(10_000)]
        pub fn lock(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_active()?;
            Ledger::<T>::do_toggle_lock(account)
        }

        /// Compulsory reassignment: retire `original` and splice its holding
        /// onto `replacement`.
        #[pallet::call_index(8)]
        #[pallet::weight(10_000)]
        pub fn master_transfer(
            origin: OriginFor<T>,
            original: T::AccountId,
            replacement: T::AccountId,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_active()?;
            Ledger::<T>::do_cancel_and_reissue(original, replacement)
        }

        /// Load one bulk-onboarding record: verify the account and issue its
        /// opening balance. Driven once per record by an external
        /// orchestrator; a retry for an already-loaded record fails on the
        /// verification step without touching state.
        #[pallet::call_index(9)]
        #[pallet::weight(10_000)]
        pub fn migrate_record(
            origin: OriginFor<T>,
            account: T::AccountId,
            info: Vec<u8>,
            balance: u128,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_active()?;
            ensure!(!Migrated::<T>::get(), Error::<T>::AlreadyMigrated);
            Ledger::<T>::do_add_verified(account.clone(), Self::fingerprint(&info))?;
            if balance > 0 {
                Ledger::<T>::do_issue(account, balance)?;
            }
            Ok(())
        }

        /// Conclude bulk onboarding, optionally handing ownership to the
        /// permanent administrator. One-time.
        #[pallet::call_index(10)]
        #[pallet::weight(10_000)]
        pub fn finish_migration(
            origin: OriginFor<T>,
            new_owner: Option<T::AccountId>,
        ) -> DispatchResult {
            let mut owner = Self::ensure_owner(origin)?;
            ensure!(!Closed::<T>::get(), Error::<T>::ControllerClosed);
            ensure!(Deployed::<T>::get(), Error::<T>::NotDeployed);
            ensure!(!Migrated::<T>::get(), Error::<T>::AlreadyMigrated);
            if let Some(new_owner) = new_owner {
                if new_owner != owner {
                    Owner::<T>::put(&new_owner);
                    owner = new_owner;
                }
            }
            Migrated::<T>::put(true);
            Self::deposit_event(Event::Ready { owner });
            Ok(())
        }

        /// Shut the controller down for migration: cascade a terminal freeze
        /// into the register and render the controller permanently inert.
        #[pallet::call_index(11)]
        #[pallet::weight(10_000)]
        pub fn close_for_migration(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(!Closed::<T>::get(), Error::<T>::ControllerClosed);
            ensure!(Deployed::<T>::get(), Error::<T>::NotDeployed);
            Closed::<T>::put(true);
            // The register may already be closed if the admin origin shut it
            // down directly; the cascade is a no-op then.
            if !Ledger::<T>::is_closed() {
                Ledger::<T>::do_close()?;
            }
            log::info!(
                target: "pallet-register-controller",
                "controller closed for migration; register frozen"
            );
            Self::deposit_event(Event::ControllerClosed);
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Single owner guard shared by every dispatchable.
        fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
            let who = ensure_signed(origin)?;
            ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::NotOwner);
            Ok(who)
        }

        /// The register must exist and the controller must not have shut down.
        fn ensure_active() -> DispatchResult {
            ensure!(!Closed::<T>::get(), Error::<T>::ControllerClosed);
            ensure!(Deployed::<T>::get(), Error::<T>::NotDeployed);
            Ok(())
        }

        /// Canonical identity fingerprint: the runtime hash of the raw
        /// identity-info bytes. The info itself never reaches storage.
        fn fingerprint(info: &[u8]) -> T::Hash {
            <T as frame_system::Config>::Hashing::hash(info)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// The deploying account, installed as the initial owner
        pub owner: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }
        }
    }
}
