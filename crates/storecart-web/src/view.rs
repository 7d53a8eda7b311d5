//! Cart table and toast components.

use leptos::prelude::*;
use storecart_core::cart::{CartListener, LineItem};
use storecart_core::{Currency, Money};

use crate::app::{edit_quantity, remove_from_cart, step_quantity};
use crate::model::{dismiss_toast, CartRow, CartView, Toast, CART_COLUMNS, EMPTY_CART_TEXT};

/// Feeds every cart change into the signal the table renders from.
pub struct CartViewSink {
    view: RwSignal<CartView>,
    currency: Currency,
}

impl CartViewSink {
    pub fn new(view: RwSignal<CartView>, currency: Currency) -> Self {
        Self { view, currency }
    }
}

impl CartListener for CartViewSink {
    fn cart_changed(&self, items: &[LineItem], total: Money) {
        self.view.set(CartView::new(items, total, self.currency));
    }
}

/// The cart table, or the empty-state paragraph.
#[component]
pub fn CartTable(cart: RwSignal<CartView>) -> impl IntoView {
    move || {
        let CartView { rows, total } = cart.get();
        if rows.is_empty() {
            return view! { <p class="text-center">{EMPTY_CART_TEXT}</p> }.into_any();
        }

        view! {
            <table class="table">
                <thead>
                    <tr>
                        {CART_COLUMNS
                            .iter()
                            .map(|heading| view! { <th>{*heading}</th> })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! { <CartRowView row=row/> })
                        .collect::<Vec<_>>()}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="3" class="text-end"><strong>"Total:"</strong></td>
                        <td colspan="2"><strong>{total}</strong></td>
                    </tr>
                </tfoot>
            </table>
        }
        .into_any()
    }
}

#[component]
fn CartRowView(row: CartRow) -> impl IntoView {
    let CartRow {
        name,
        price,
        quantity,
        line_total,
    } = row;
    let decrement = name.clone();
    let edit = name.clone();
    let increment = name.clone();
    let remove = name.clone();

    view! {
        <tr>
            <td>{name}</td>
            <td>{price}</td>
            <td>
                <div class="input-group" style="width: 120px;">
                    <button
                        class="btn btn-outline-secondary"
                        on:click=move |_| step_quantity(&decrement, -1)
                    >
                        "-"
                    </button>
                    <input
                        type="number"
                        class="form-control text-center"
                        min="1"
                        prop:value=quantity.to_string()
                        on:change=move |ev| edit_quantity(&edit, &event_target_value(&ev))
                    />
                    <button
                        class="btn btn-outline-secondary"
                        on:click=move |_| step_quantity(&increment, 1)
                    >
                        "+"
                    </button>
                </div>
            </td>
            <td>{line_total}</td>
            <td>
                <button
                    class="btn btn-danger btn-sm"
                    title="Remove"
                    on:click=move |_| remove_from_cart(&remove)
                >
                    <i class="bi bi-trash"></i>
                </button>
            </td>
        </tr>
    }
}

/// Toasts pinned to the bottom corner, newest last.
#[component]
pub fn ToastStack(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-container position-fixed bottom-0 end-0 p-3" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = toast.class();
                    view! {
                        <div class=class role="alert" aria-atomic="true">
                            <div class="d-flex">
                                <div class="toast-body">{toast.message}</div>
                                <button
                                    type="button"
                                    class="btn-close btn-close-white me-2 m-auto"
                                    aria-label="Close"
                                    on:click=move |_| toasts.update(|ts| dismiss_toast(ts, id))
                                ></button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
