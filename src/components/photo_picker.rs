// =============================================================================
// Next Frame Web - Photo Picker
// =============================================================================
// Drop zone + file input for profile photos. The controller's attachment set
// is authoritative: after every add, drop or remove the native input's file
// list is rebuilt from it.
// =============================================================================

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::File;

use crate::services::toast::use_toaster;
use crate::submission::attachments::{Attachment, MAX_ATTACHMENTS};
use crate::submission::{FormController, PHOTOS_FIELD};
use crate::utils::{files_from_list, format_file_size, sync_file_input};

/// Photo selection for the profile form.
#[component]
pub fn PhotoPicker(controller: RwSignal<FormController<File>, LocalStorage>) -> impl IntoView {
    let toaster = use_toaster();
    let input_ref: NodeRef<Input> = NodeRef::new();
    let dragging = RwSignal::new(false);

    let sync_input = move || {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        let files = controller.with_untracked(|c| c.attachments().to_vec());
        if let Err(e) = sync_file_input(&input, &files) {
            log::warn!("could not sync photo input: {e:?}");
        }
    };

    let add_files = move |files: Vec<File>| {
        let advisory = controller
            .try_update(|c| c.add_attachments(files))
            .flatten();
        sync_input();
        if let Some(notice) = advisory {
            toaster.push(notice);
        }
    };

    let remove_file = move |index: usize| {
        let _ = controller.try_update(|c| c.remove_attachment(index));
        sync_input();
    };

    let previews = move || {
        controller.with(|c| {
            c.attachments()
                .as_slice()
                .iter()
                .map(|f| (f.file_name(), f.byte_size()))
                .enumerate()
                .collect::<Vec<_>>()
        })
    };
    let remaining = move || controller.with(|c| c.attachments().remaining());

    view! {
        <div class="form-field">
            <label class="form-label" for="photos">"Photos"</label>
            <div
                class="photo-dropzone"
                class:dragging=move || dragging.get()
                class:full=move || controller.with(|c| c.attachments().is_full())
                on:dragover=move |ev| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=move |ev| {
                    ev.prevent_default();
                    dragging.set(false);
                    let files = files_from_list(ev.data_transfer().and_then(|dt| dt.files()));
                    add_files(files);
                }
            >
                <input
                    node_ref=input_ref
                    id="photos"
                    name=PHOTOS_FIELD
                    type="file"
                    accept="image/*"
                    multiple=true
                    class="photo-input"
                    on:change=move |_| {
                        let picked = input_ref
                            .get_untracked()
                            .map(|input| files_from_list(input.files()))
                            .unwrap_or_default();
                        add_files(picked);
                    }
                />
                <p class="photo-dropzone-hint">
                    "Drag photos here or click to browse. "
                    {format!("Up to {MAX_ATTACHMENTS} images, 10 MB each.")}
                </p>
                <p class="photo-dropzone-count">
                    {move || format!("{} slot(s) left", remaining())}
                </p>
            </div>

            <ul class="photo-list">
                {move || previews()
                    .into_iter()
                    .map(|(index, (name, size))| view! {
                        <li class="photo-item">
                            <span class="photo-name">{name}</span>
                            <span class="photo-size">{format_file_size(size)}</span>
                            <button
                                type="button"
                                class="photo-remove"
                                aria-label="Remove photo"
                                on:click=move |_| remove_file(index)
                            >
                                "✕"
                            </button>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
